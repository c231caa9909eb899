use std::path::Path;

use anyhow::Result;

use crate::models::Analysis;

pub mod ant;

pub trait Analyzer {
    fn analyze(&self, path: &Path) -> Result<Analysis>;
}
