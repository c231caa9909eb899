use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::debug;

use crate::error::ScanError;

/// Find every `*.jar` file under `root`, at any depth.
///
/// Paths whose root-relative form matches one of `exclude` are skipped.
/// Results come back in the order the glob walk yields them (sorted within
/// each directory), so an unchanged tree always scans the same way.
pub fn scan_archives(root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let root_str = root.to_str().ok_or_else(|| ScanError::NonUtf8Root {
        path: root.to_path_buf(),
    })?;
    let pattern = format!("{}/**/*.jar", Pattern::escape(root_str.trim_end_matches('/')));

    let excludes = exclude
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| ScanError::Pattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let entries = glob::glob(&pattern).map_err(|source| ScanError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let options = MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::new()
    };

    let mut archives = Vec::new();
    for entry in entries {
        let path = entry?;
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(&path);
        if excludes
            .iter()
            .any(|p| p.matches_path_with(relative, options))
        {
            debug!("excluded {}", path.display());
            continue;
        }

        archives.push(path);
    }

    debug!("found {} jar(s) under {}", archives.len(), root.display());
    Ok(archives)
}
