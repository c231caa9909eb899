//! Fixtures shared by unit tests.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::diagnostics::Diagnostics;
use crate::models::{Import, ResolutionSource};
use crate::resolver::StrategyError;

/// Write a jar named `name` into `dir` containing `entries` in order.
pub fn write_jar(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }

    let mut writer = ZipWriter::new(File::create(&path).unwrap());
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (entry, contents) in entries {
        writer.start_file(*entry, options).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path
}

/// A minimal pom with the given coordinates.
pub fn pom(group_id: &str, artifact_id: &str, version: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>{group_id}</groupId>
  <artifactId>{artifact_id}</artifactId>
  <version>{version}</version>
</project>"#
    )
}

/// Captures diagnostics so tests can assert on the fallback path taken.
#[derive(Default)]
pub struct RecordingDiagnostics {
    failures: Mutex<Vec<ResolutionSource>>,
    unresolved: Mutex<Vec<PathBuf>>,
}

impl RecordingDiagnostics {
    pub fn failures(&self) -> Vec<ResolutionSource> {
        self.failures.lock().unwrap().clone()
    }

    pub fn unresolved_archives(&self) -> Vec<PathBuf> {
        self.unresolved.lock().unwrap().clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn strategy_failed(&self, _archive: &Path, source: ResolutionSource, _reason: &StrategyError) {
        self.failures.lock().unwrap().push(source);
    }

    fn resolved(&self, _archive: &Path, _import: &Import) {}

    fn unresolved(&self, archive: &Path) {
        self.unresolved.lock().unwrap().push(archive.to_path_buf());
    }
}
