//! `jar-resolver` — recover Maven identities from the jars vendored in an
//! Ant-style project and assemble them into a dependency graph.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Find every `*.jar` under the project ([`scanner`]).
//! 4. Resolve each jar: embedded pom, then manifest, then file name ([`resolver`]).
//! 5. Collect the identities into a flat graph ([`graph`]).
//! 6. Render the requested report ([`report`]).

mod analyzer;
mod archive;
mod cli;
mod config;
mod diagnostics;
mod error;
mod graph;
mod models;
mod report;
mod resolver;
mod scanner;
#[cfg(test)]
mod testutil;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use analyzer::ant::AntAnalyzer;
use analyzer::Analyzer;
use cli::{Cli, ReportFormat};
use config::load_config;
use diagnostics::{Diagnostics, TracingDiagnostics};
use models::{Import, ResolutionSource};
use resolver::StrategyError;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Resolve project path
    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let config = load_config(&path, cli.config.as_deref())?;

    let progress = match cli.report {
        ReportFormat::Terminal if !cli.quiet => Some(spinner()?),
        _ => None,
    };
    let diagnostics = ProgressDiagnostics {
        inner: TracingDiagnostics,
        progress: progress.as_ref(),
    };

    let mut analyzer = AntAnalyzer::new(&config, &diagnostics);
    if cli.sequential {
        analyzer = analyzer.sequential();
    }
    let analysis = analyzer.analyze(&path)?;

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&analysis, cli.quiet)?,
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis.graph)?),
    }

    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(if verbose { "debug" } else { "warn" }),
    }
}

fn spinner() -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} jar(s) {msg}")?,
    );
    pb.set_message("resolving");
    Ok(pb)
}

/// Forwards to `tracing` and ticks the progress spinner once per jar.
struct ProgressDiagnostics<'a> {
    inner: TracingDiagnostics,
    progress: Option<&'a ProgressBar>,
}

impl ProgressDiagnostics<'_> {
    fn log(&self, f: impl FnOnce()) {
        match self.progress {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }

    fn tick(&self) {
        if let Some(pb) = self.progress {
            pb.inc(1);
        }
    }
}

impl Diagnostics for ProgressDiagnostics<'_> {
    fn strategy_failed(&self, archive: &Path, source: ResolutionSource, reason: &StrategyError) {
        self.log(|| self.inner.strategy_failed(archive, source, reason));
    }

    fn resolved(&self, archive: &Path, import: &Import) {
        self.log(|| self.inner.resolved(archive, import));
        self.tick();
    }

    fn unresolved(&self, archive: &Path) {
        self.log(|| self.inner.unresolved(archive));
        self.tick();
    }
}
