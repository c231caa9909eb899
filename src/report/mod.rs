//! Report renderers for resolution results.
//!
//! - [`terminal`] — colored table of direct imports with a summary box;
//!   respects `--quiet`.
//!
//! JSON output is the serialized [`DependencyGraph`](crate::models::DependencyGraph)
//! and needs no renderer of its own.

pub mod terminal;
