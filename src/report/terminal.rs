use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{Analysis, Import, ResolutionSource};

/// Render a colored terminal report.
pub fn render(analysis: &Analysis, quiet: bool) -> Result<()> {
    let graph = &analysis.graph;
    let counts = SourceCounts::tally(&graph.direct);
    let unresolved = analysis.unresolved_count();

    if quiet {
        println!(
            "Jars: {}  Resolved: {}  Unresolved: {}  Packages: {}",
            analysis.archives_scanned,
            graph.direct.len().to_string().green(),
            unresolved.to_string().yellow(),
            graph.transitive.len(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "jar-resolver".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Scanning: {}\n", analysis.root.display());

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(
        " │  {:<48} │",
        format!("Jars found         : {}", analysis.archives_scanned)
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Resolved        : {:>4}  [pom {}, manifest {}, filename {}]",
            "✓".green(),
            graph.direct.len(),
            counts.pom,
            counts.manifest,
            counts.filename
        )
    );
    println!(
        " │  {:<48} │",
        format!("{}  Unresolved      : {:>4}", "⚠".yellow(), unresolved)
    );
    println!(
        " │  {:<48} │",
        format!("Unique packages    : {}", graph.transitive.len())
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if !graph.direct.is_empty() {
        println!(" {} Direct dependencies:\n", "[JARS]".cyan().bold());
        render_table(analysis);
        println!();
    }

    if unresolved > 0 {
        println!(
            " {} {} jar(s) could not be identified; rerun with --verbose for details.\n",
            "[WARN]".yellow().bold(),
            unresolved
        );
    }

    Ok(())
}

fn render_table(analysis: &Analysis) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Revision").add_attribute(Attribute::Bold),
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("Jar").add_attribute(Attribute::Bold),
        ]);

    for (index, import) in analysis.graph.direct.iter().enumerate() {
        let source_color = match import.source {
            ResolutionSource::Pom => Color::Green,
            ResolutionSource::Manifest => Color::Yellow,
            ResolutionSource::Filename => Color::DarkGrey,
        };

        let revision = if import.resolved.revision.is_empty() {
            Cell::new("-").fg(Color::DarkGrey)
        } else {
            Cell::new(&import.resolved.revision)
        };

        let jar = import
            .archive
            .strip_prefix(&analysis.root)
            .unwrap_or(&import.archive);

        table.add_row(vec![
            Cell::new(index + 1).set_alignment(CellAlignment::Right),
            Cell::new(&import.resolved.name),
            revision,
            Cell::new(import.source.to_string())
                .fg(source_color)
                .set_alignment(CellAlignment::Center),
            Cell::new(jar.display()),
        ]);
    }

    println!("{}", table);
}

/// How many imports each strategy produced.
#[derive(Debug, Default, PartialEq)]
struct SourceCounts {
    pom: usize,
    manifest: usize,
    filename: usize,
}

impl SourceCounts {
    fn tally(imports: &[Import]) -> Self {
        let mut counts = Self::default();
        for import in imports {
            match import.source {
                ResolutionSource::Pom => counts.pom += 1,
                ResolutionSource::Manifest => counts.manifest += 1,
                ResolutionSource::Filename => counts.filename += 1,
            }
        }
        counts
    }
}
