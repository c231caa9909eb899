use super::{Candidate, Strategy, StrategyError};
use crate::models::{Identity, ResolutionSource};

const BUNDLE_SYMBOLIC_NAME: &str = "Bundle-SymbolicName";
const IMPLEMENTATION_VERSION: &str = "Implementation-Version";

/// Recover an identity from the jar manifest's OSGi symbolic name and
/// implementation version.
///
/// The group id cannot be recovered this way, so the symbolic name stands in
/// for the whole name.
pub struct ManifestStrategy {
    max_bytes: u64,
}

impl ManifestStrategy {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

impl Strategy for ManifestStrategy {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::Manifest
    }

    fn attempt(&self, candidate: &mut Candidate<'_>) -> Result<Identity, StrategyError> {
        let manifest = candidate
            .archive()?
            .manifest(self.max_bytes)
            .map_err(StrategyError::Manifest)?
            .ok_or(StrategyError::NoManifest)?;

        match (
            manifest.get(BUNDLE_SYMBOLIC_NAME),
            manifest.get(IMPLEMENTATION_VERSION),
        ) {
            (Some(name), Some(version)) => Ok(Identity::maven(name, version)),
            _ => Err(StrategyError::MissingAttributes),
        }
    }
}
