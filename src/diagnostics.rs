//! Side channel for resolution events.
//!
//! The resolver reports what it tried through a [`Diagnostics`] value it is
//! handed; nothing it returns depends on the reporter.

use std::path::Path;

use tracing::{debug, warn};

use crate::models::{Import, ResolutionSource};
use crate::resolver::StrategyError;

pub trait Diagnostics: Sync {
    /// A strategy failed and resolution moves on to the next one.
    fn strategy_failed(&self, archive: &Path, source: ResolutionSource, reason: &StrategyError);

    fn resolved(&self, archive: &Path, import: &Import);

    /// Every strategy failed; the archive is dropped from the graph.
    fn unresolved(&self, archive: &Path);
}

/// Emits every event through `tracing`.
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn strategy_failed(&self, archive: &Path, source: ResolutionSource, reason: &StrategyError) {
        debug!(archive = %archive.display(), strategy = %source, "{reason}");
    }

    fn resolved(&self, archive: &Path, import: &Import) {
        debug!(
            archive = %archive.display(),
            strategy = %import.source,
            "resolved {}",
            import.resolved
        );
    }

    fn unresolved(&self, archive: &Path) {
        warn!("unable to resolve jar: {}", archive.display());
    }
}
