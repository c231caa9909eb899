//! Identity recovery for a single jar.
//!
//! [`IdentityResolver`] runs an ordered list of [`Strategy`] values against
//! one archive and stops at the first that yields an identity:
//!
//! 1. [`pom::PomStrategy`] — embedded `META-INF/**/pom.xml`
//! 2. [`manifest::ManifestStrategy`] — `Bundle-SymbolicName` + `Implementation-Version`
//! 3. [`filename::FilenameStrategy`] — `name-revision.jar`
//!
//! Every failure is reported through [`Diagnostics`] and absorbed; a jar no
//! strategy can identify is simply dropped.

use std::path::Path;

use thiserror::Error;

use crate::archive::JarArchive;
use crate::diagnostics::Diagnostics;
use crate::error::ArchiveError;
use crate::models::{Identity, Import, ResolutionSource};

pub mod filename;
pub mod manifest;
pub mod pom;

/// Default cap on the size of an embedded pom or manifest.
pub const DEFAULT_MAX_DESCRIPTOR_BYTES: u64 = 1024 * 1024;

/// Why a strategy could not produce an identity.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("archive unavailable: {0}")]
    ArchiveUnavailable(String),

    #[error("archive listing failed: {0}")]
    Listing(#[source] ArchiveError),

    #[error("no META-INF pom.xml entry")]
    NoDescriptor,

    #[error("failed to read '{entry}': {source}")]
    DescriptorRead {
        entry: String,
        #[source]
        source: ArchiveError,
    },

    #[error("failed to decode '{entry}': {source}")]
    DescriptorDecode {
        entry: String,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("failed to read manifest: {0}")]
    Manifest(#[source] ArchiveError),

    #[error("no manifest")]
    NoManifest,

    #[error("manifest lacks Bundle-SymbolicName or Implementation-Version")]
    MissingAttributes,

    #[error("unable to parse jar file name '{file}'")]
    EmptyName { file: String },
}

/// The jar under resolution.
///
/// The container is opened at most once, on first use, and closed when the
/// candidate is dropped.
pub struct Candidate<'a> {
    path: &'a Path,
    archive: Option<Result<JarArchive, ArchiveError>>,
}

impl<'a> Candidate<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self {
            path,
            archive: None,
        }
    }

    pub fn path(&self) -> &Path {
        self.path
    }

    /// The opened container, or the reason it could not be opened.
    pub fn archive(&mut self) -> Result<&mut JarArchive, StrategyError> {
        let path = self.path;
        self.archive
            .get_or_insert_with(|| JarArchive::open(path))
            .as_mut()
            .map_err(|e| StrategyError::ArchiveUnavailable(e.to_string()))
    }
}

/// One independent way of recovering an identity from a jar.
pub trait Strategy: Send + Sync {
    fn source(&self) -> ResolutionSource;
    fn attempt(&self, candidate: &mut Candidate<'_>) -> Result<Identity, StrategyError>;
}

pub struct IdentityResolver {
    strategies: Vec<Box<dyn Strategy>>,
}

impl IdentityResolver {
    /// The standard chain: pom, then manifest, then filename.
    pub fn new(max_descriptor_bytes: u64) -> Self {
        Self::with_strategies(vec![
            Box::new(pom::PomStrategy::new(max_descriptor_bytes)),
            Box::new(manifest::ManifestStrategy::new(max_descriptor_bytes)),
            Box::new(filename::FilenameStrategy),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { strategies }
    }

    /// Resolve one jar. Returns `None` when every strategy fails.
    pub fn resolve(&self, path: &Path, diagnostics: &dyn Diagnostics) -> Option<Import> {
        let mut candidate = Candidate::new(path);

        for strategy in &self.strategies {
            match strategy.attempt(&mut candidate) {
                Ok(resolved) => {
                    let import = Import {
                        resolved,
                        source: strategy.source(),
                        archive: path.to_path_buf(),
                    };
                    diagnostics.resolved(path, &import);
                    return Some(import);
                }
                Err(reason) => diagnostics.strategy_failed(path, strategy.source(), &reason),
            }
        }

        diagnostics.unresolved(path);
        None
    }
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DESCRIPTOR_BYTES)
    }
}
