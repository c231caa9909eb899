use std::sync::LazyLock;

use regex::Regex;

use super::{Candidate, Strategy, StrategyError};
use crate::models::{Identity, ResolutionSource};

/// Trailing `-sources`/`-javadoc` marker plus the `.jar` extension.
static JAR_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-sources|-javadoc)?\.jar$").expect("valid jar suffix pattern"));

/// Last resort: read `name-revision.jar` off the file name.
///
/// The final `-` separated segment is always taken as the revision, so
/// `my-library.jar` becomes name `my`, revision `library`. Consumers already
/// rely on this split; do not make it smarter without real filename data.
pub struct FilenameStrategy;

impl Strategy for FilenameStrategy {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::Filename
    }

    fn attempt(&self, candidate: &mut Candidate<'_>) -> Result<Identity, StrategyError> {
        let file = candidate
            .path()
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (name, revision) = split_file_name(&file)?;
        Ok(Identity::maven(name, revision))
    }
}

fn split_file_name(file: &str) -> Result<(String, String), StrategyError> {
    let stem = JAR_SUFFIX.replace(file, "");

    let parts: Vec<&str> = stem.split('-').collect();
    let (name, revision) = match parts.as_slice() {
        [only] => (only.to_string(), String::new()),
        [init @ .., last] => (init.join("-"), last.to_string()),
        [] => (String::new(), String::new()),
    };

    if name.is_empty() {
        return Err(StrategyError::EmptyName {
            file: file.to_string(),
        });
    }
    Ok((name, revision))
}
