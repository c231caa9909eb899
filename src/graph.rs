use std::collections::BTreeMap;
use std::path::PathBuf;

use rayon::prelude::*;

use crate::diagnostics::Diagnostics;
use crate::models::{DependencyGraph, Identity, Import, Package};
use crate::resolver::IdentityResolver;

/// Accumulates resolved imports in scan order.
#[derive(Default)]
pub struct GraphBuilder {
    direct: Vec<Import>,
    transitive: BTreeMap<Identity, Package>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to `direct` and (re)insert the identity into `transitive`.
    pub fn record(&mut self, import: Import) {
        self.transitive
            .insert(import.resolved.clone(), Package::observed(import.resolved.clone()));
        self.direct.push(import);
    }

    pub fn finish(self) -> DependencyGraph {
        DependencyGraph {
            direct: self.direct,
            transitive: self.transitive,
        }
    }
}

/// Resolve every archive and assemble the graph.
///
/// With `parallel` set, archives are resolved on the rayon pool; results are
/// still recorded in `paths` order so `direct` is identical either way.
pub fn build_graph(
    paths: &[PathBuf],
    resolver: &IdentityResolver,
    diagnostics: &dyn Diagnostics,
    parallel: bool,
) -> DependencyGraph {
    let outcomes: Vec<Option<Import>> = if parallel {
        paths
            .par_iter()
            .map(|path| resolver.resolve(path, diagnostics))
            .collect()
    } else {
        paths
            .iter()
            .map(|path| resolver.resolve(path, diagnostics))
            .collect()
    };

    let mut builder = GraphBuilder::new();
    for import in outcomes.into_iter().flatten() {
        builder.record(import);
    }
    builder.finish()
}
