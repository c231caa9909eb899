//! Read-only access to a jar on disk.
//!
//! A [`JarArchive`] owns the open file handle; dropping it releases the
//! descriptor. Entry readers never outlive a single method call.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::ArchiveError;

pub mod manifest;

pub use manifest::Manifest;

/// Conventional location of the jar manifest.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

pub struct JarArchive {
    inner: ZipArchive<File>,
}

impl JarArchive {
    /// Open `path` and parse its central directory.
    pub fn open(path: &Path) -> Result<Self, ArchiveError> {
        let file = File::open(path).map_err(|source| ArchiveError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let inner = ZipArchive::new(file)?;
        Ok(Self { inner })
    }

    /// Entry names in central-directory order.
    pub fn entry_names(&mut self) -> Result<Vec<String>, ArchiveError> {
        let mut names = Vec::with_capacity(self.inner.len());
        for index in 0..self.inner.len() {
            let entry = self.inner.by_index_raw(index)?;
            names.push(entry.name().to_string());
        }
        Ok(names)
    }

    /// Read a whole entry, refusing anything larger than `limit` bytes.
    pub fn read_entry(&mut self, name: &str, limit: u64) -> Result<Vec<u8>, ArchiveError> {
        let entry = self.inner.by_name(name)?;
        if entry.size() > limit {
            return Err(ArchiveError::EntryTooLarge {
                entry: name.to_string(),
                limit,
            });
        }

        // The declared size can lie; cap the actual read as well.
        let mut buf = Vec::new();
        entry
            .take(limit.saturating_add(1))
            .read_to_end(&mut buf)
            .map_err(|source| ArchiveError::EntryRead {
                entry: name.to_string(),
                source,
            })?;
        if buf.len() as u64 > limit {
            return Err(ArchiveError::EntryTooLarge {
                entry: name.to_string(),
                limit,
            });
        }
        Ok(buf)
    }

    /// Parse `META-INF/MANIFEST.MF`, or `None` if the jar has no manifest.
    pub fn manifest(&mut self, limit: u64) -> Result<Option<Manifest>, ArchiveError> {
        let bytes = match self.read_entry(MANIFEST_PATH, limit) {
            Ok(bytes) => bytes,
            Err(ArchiveError::Container(ZipError::FileNotFound)) => return Ok(None),
            Err(e) => return Err(e),
        };
        // Invalid UTF-8 is replaced, not rejected.
        let text = String::from_utf8_lossy(&bytes);
        Ok(Some(Manifest::parse(&text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::write_jar;
    use tempfile::TempDir;

    #[test]
    fn test_entry_names_keep_archive_order() {
        let dir = TempDir::new().unwrap();
        let jar = write_jar(
            dir.path(),
            "lib.jar",
            &[
                ("META-INF/maven/a/b/pom.xml", "<project/>"),
                ("com/example/Lib.class", ""),
                ("META-INF/pom.xml", "<project/>"),
            ],
        );

        let mut archive = JarArchive::open(&jar).unwrap();
        assert_eq!(
            archive.entry_names().unwrap(),
            vec![
                "META-INF/maven/a/b/pom.xml",
                "com/example/Lib.class",
                "META-INF/pom.xml"
            ]
        );
    }

    #[test]
    fn test_read_entry_enforces_limit() {
        let dir = TempDir::new().unwrap();
        let jar = write_jar(dir.path(), "big.jar", &[("META-INF/pom.xml", "0123456789")]);

        let mut archive = JarArchive::open(&jar).unwrap();
        assert_eq!(archive.read_entry("META-INF/pom.xml", 10).unwrap().len(), 10);
        assert!(matches!(
            archive.read_entry("META-INF/pom.xml", 4),
            Err(ArchiveError::EntryTooLarge { limit: 4, .. })
        ));
    }

    #[test]
    fn test_missing_manifest_is_none() {
        let dir = TempDir::new().unwrap();
        let jar = write_jar(dir.path(), "bare.jar", &[("a.txt", "a")]);

        let mut archive = JarArchive::open(&jar).unwrap();
        assert!(archive.manifest(1024).unwrap().is_none());
    }

    #[test]
    fn test_open_rejects_non_zip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.jar");
        std::fs::write(&path, b"definitely not a zip").unwrap();

        assert!(matches!(
            JarArchive::open(&path),
            Err(ArchiveError::Container(_))
        ));
    }
}
