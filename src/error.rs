//! Error types.
//!
//! [`ScanError`] is the only error that aborts an analysis. [`ArchiveError`]
//! describes why a single jar could not be read; the resolver absorbs it and
//! moves on to the next strategy.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal failure while discovering archives under the project root.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("scan root '{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("scan root '{path}' is not valid UTF-8")]
    NonUtf8Root { path: PathBuf },

    #[error("invalid scan pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to traverse '{}': {}", .0.path().display(), .0.error())]
    Traversal(#[from] glob::GlobError),
}

/// Per-archive failure; never surfaces to the caller of an analysis.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a readable zip container: {0}")]
    Container(#[from] zip::result::ZipError),

    #[error("failed to read entry '{entry}': {source}")]
    EntryRead {
        entry: String,
        #[source]
        source: std::io::Error,
    },

    #[error("entry '{entry}' exceeds {limit} bytes")]
    EntryTooLarge { entry: String, limit: u64 },

    #[error("entry '{entry}' is not valid UTF-8")]
    EntryEncoding { entry: String },
}
