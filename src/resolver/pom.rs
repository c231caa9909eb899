use serde::Deserialize;

use super::{Candidate, Strategy, StrategyError};
use crate::error::ArchiveError;
use crate::models::{Identity, ResolutionSource};

/// Recover an identity from a `pom.xml` embedded under `META-INF`.
///
/// When several descriptors are embedded the shallowest one is taken; deeper
/// ones are usually parents or shaded dependencies.
pub struct PomStrategy {
    max_bytes: u64,
}

impl PomStrategy {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

impl Strategy for PomStrategy {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::Pom
    }

    fn attempt(&self, candidate: &mut Candidate<'_>) -> Result<Identity, StrategyError> {
        let archive = candidate.archive()?;
        let names = archive.entry_names().map_err(StrategyError::Listing)?;
        let entry = select_descriptor(&names)
            .ok_or(StrategyError::NoDescriptor)?
            .to_string();

        let bytes = archive
            .read_entry(&entry, self.max_bytes)
            .map_err(|source| StrategyError::DescriptorRead {
                entry: entry.clone(),
                source,
            })?;

        let pom = decode_descriptor(&entry, &bytes)?;
        Ok(Identity::maven(pom.name(), pom.version))
    }
}

/// Shortest `META-INF…pom.xml` entry; ties go to the first in archive order.
fn select_descriptor(names: &[String]) -> Option<&str> {
    names
        .iter()
        .filter(|name| name.starts_with("META-INF") && name.ends_with("pom.xml"))
        .min_by_key(|name| name.len())
        .map(String::as_str)
}

/// The project's own coordinates. Nothing is inherited from `<parent>`:
/// a missing element decodes as empty and stays empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PomDescriptor {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl PomDescriptor {
    /// Always `group:artifact`, even when either side is empty.
    fn name(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

fn decode_descriptor(entry: &str, bytes: &[u8]) -> Result<PomDescriptor, StrategyError> {
    let xml = std::str::from_utf8(bytes).map_err(|_| StrategyError::DescriptorRead {
        entry: entry.to_string(),
        source: ArchiveError::EntryEncoding {
            entry: entry.to_string(),
        },
    })?;

    quick_xml::de::from_str(xml).map_err(|source| StrategyError::DescriptorDecode {
        entry: entry.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{pom, write_jar};
    use tempfile::TempDir;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_select_shortest_descriptor() {
        let entries = names(&["META-INF/maven/a/b/pom.xml", "META-INF/pom.xml"]);
        assert_eq!(select_descriptor(&entries), Some("META-INF/pom.xml"));
    }

    #[test]
    fn test_select_ignores_paths_outside_meta_inf() {
        let entries = names(&["pom.xml", "lib/META-INF/pom.xml", "META-INF/pom.properties"]);
        assert_eq!(select_descriptor(&entries), None);
    }

    #[test]
    fn test_select_tie_keeps_first() {
        let entries = names(&["META-INF/maven/x/y/pom.xml", "META-INF/maven/a/b/pom.xml"]);
        assert_eq!(select_descriptor(&entries), Some("META-INF/maven/x/y/pom.xml"));
    }

    #[test]
    fn test_decode_plain_pom() {
        let xml = pom("com.example", "lib", "1.2.3");
        let decoded = decode_descriptor("META-INF/pom.xml", xml.as_bytes()).unwrap();
        assert_eq!(decoded.name(), "com.example:lib");
        assert_eq!(decoded.version, "1.2.3");
    }

    #[test]
    fn test_decode_without_group_keeps_separator() {
        let xml = "<project><artifactId>lib</artifactId><version>1.0</version></project>";
        let decoded = decode_descriptor("META-INF/pom.xml", xml.as_bytes()).unwrap();
        assert_eq!(decoded.name(), ":lib");
        assert_eq!(decoded.version, "1.0");
    }

    #[test]
    fn test_decode_ignores_parent_coordinates() {
        let xml = r#"<?xml version="1.0"?>
<project>
  <parent>
    <groupId>p.g</groupId>
    <artifactId>commons-parent</artifactId>
    <version>52</version>
  </parent>
  <artifactId>lib</artifactId>
  <dependencies>
    <dependency>
      <groupId>junit</groupId>
      <artifactId>junit</artifactId>
      <version>4.13.2</version>
    </dependency>
  </dependencies>
</project>"#;
        let decoded = decode_descriptor("META-INF/pom.xml", xml.as_bytes()).unwrap();
        assert_eq!(decoded.name(), ":lib");
        assert_eq!(decoded.version, "");
    }

    #[test]
    fn test_decode_without_artifact_still_resolves() {
        let xml = "<project><groupId>g</groupId><version>1</version></project>";
        let decoded = decode_descriptor("META-INF/pom.xml", xml.as_bytes()).unwrap();
        assert_eq!(decoded.name(), "g:");
        assert_eq!(decoded.version, "1");
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert!(matches!(
            decode_descriptor("META-INF/pom.xml", &[0x3c, 0xff, 0xfe]),
            Err(StrategyError::DescriptorRead { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_malformed_xml() {
        assert!(matches!(
            decode_descriptor(
                "META-INF/pom.xml",
                b"<project><groupId>g</artifactId></project>"
            ),
            Err(StrategyError::DescriptorDecode { .. })
        ));
    }

    #[test]
    fn test_attempt_prefers_shallow_descriptor() {
        let dir = TempDir::new().unwrap();
        let deep = pom("a", "b", "0.0.1");
        let shallow = pom("com.example", "lib", "1.2.3");
        let jar = write_jar(
            dir.path(),
            "lib.jar",
            &[
                ("META-INF/maven/a/b/pom.xml", deep.as_str()),
                ("META-INF/pom.xml", shallow.as_str()),
            ],
        );

        let mut candidate = Candidate::new(&jar);
        let identity = PomStrategy::new(1024 * 1024)
            .attempt(&mut candidate)
            .unwrap();
        assert_eq!(identity, Identity::maven("com.example:lib", "1.2.3"));
    }

    #[test]
    fn test_attempt_without_descriptor() {
        let dir = TempDir::new().unwrap();
        let jar = write_jar(dir.path(), "lib.jar", &[("com/example/Lib.class", "")]);

        let mut candidate = Candidate::new(&jar);
        assert!(matches!(
            PomStrategy::new(1024).attempt(&mut candidate),
            Err(StrategyError::NoDescriptor)
        ));
    }
}
