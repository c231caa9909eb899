use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Ecosystem {
    Maven,
}

impl Ecosystem {
    /// Short prefix used in locator strings (`mvn+group:artifact$version`).
    pub fn locator_prefix(&self) -> &'static str {
        match self {
            Ecosystem::Maven => "mvn",
        }
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ecosystem::Maven => write!(f, "Maven"),
        }
    }
}

/// A resolved package identity. Two identities are equal iff all three
/// fields match; this is the key for graph membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Identity {
    pub ecosystem: Ecosystem,
    pub name: String,
    pub revision: String,
}

impl Identity {
    pub fn maven(name: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            ecosystem: Ecosystem::Maven,
            name: name.into(),
            revision: revision.into(),
        }
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}+{}${}",
            self.ecosystem.locator_prefix(),
            self.name,
            self.revision
        )
    }
}

/// Which resolution strategy produced an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    Pom,
    Manifest,
    Filename,
}

impl std::fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionSource::Pom => write!(f, "pom"),
            ResolutionSource::Manifest => write!(f, "manifest"),
            ResolutionSource::Filename => write!(f, "filename"),
        }
    }
}

/// One entry of the direct dependency list.
///
/// `source` and `archive` are provenance only; graph membership is decided
/// by `resolved` alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Import {
    pub resolved: Identity,
    pub source: ResolutionSource,
    pub archive: PathBuf,
}

/// Whether a package's own dependencies were discovered.
///
/// Jar resolution never looks inside a package for its dependencies, so
/// every package it records is `Unknown`. Consumers must not read an
/// `Unknown` package as a leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DependencyKnowledge {
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Package {
    pub id: Identity,
    pub dependencies: DependencyKnowledge,
}

impl Package {
    /// A package observed on disk whose own dependencies were not examined.
    pub fn observed(id: Identity) -> Self {
        Self {
            id,
            dependencies: DependencyKnowledge::Unknown,
        }
    }
}

/// Result of analysing one project.
///
/// Invariant: every `Import::resolved` in `direct` is a key of `transitive`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DependencyGraph {
    pub direct: Vec<Import>,
    #[serde(serialize_with = "serialize_by_locator")]
    pub transitive: BTreeMap<Identity, Package>,
}

/// JSON object keys must be strings, so packages are keyed by locator.
fn serialize_by_locator<S>(
    transitive: &BTreeMap<Identity, Package>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(transitive.len()))?;
    for (id, package) in transitive {
        map.serialize_entry(&id.to_string(), package)?;
    }
    map.end()
}

/// What the analyzer hands back to the CLI: the graph plus enough context
/// to tell how many archives were dropped.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub root: PathBuf,
    pub archives_scanned: usize,
    pub graph: DependencyGraph,
}

impl Analysis {
    pub fn unresolved_count(&self) -> usize {
        self.archives_scanned.saturating_sub(self.graph.direct.len())
    }
}
