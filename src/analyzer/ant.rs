use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::graph::build_graph;
use crate::models::Analysis;
use crate::resolver::IdentityResolver;
use crate::scanner::scan_archives;

/// Analyzer for Ant-style projects that vendor pre-built jars.
///
/// Every `*.jar` under the project root becomes a flat, single-level
/// dependency; no transitive edges are discovered.
pub struct AntAnalyzer<'a> {
    config: &'a Config,
    diagnostics: &'a dyn Diagnostics,
    parallel: bool,
}

impl<'a> AntAnalyzer<'a> {
    /// Create an analyzer that reports per-jar events to `diagnostics`.
    pub fn new(config: &'a Config, diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            config,
            diagnostics,
            parallel: config.resolver.parallel,
        }
    }

    /// Force sequential resolution regardless of configuration.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl super::Analyzer for AntAnalyzer<'_> {
    fn analyze(&self, path: &Path) -> Result<Analysis> {
        let archives = scan_archives(path, &self.config.scan.exclude)
            .with_context(|| format!("failed to scan {}", path.display()))?;

        debug!("running Ant analysis over {} jar(s)", archives.len());

        let resolver = IdentityResolver::new(self.config.resolver.max_descriptor_bytes);
        let graph = build_graph(&archives, &resolver, self.diagnostics, self.parallel);

        Ok(Analysis {
            root: path.to_path_buf(),
            archives_scanned: archives.len(),
            graph,
        })
    }
}
