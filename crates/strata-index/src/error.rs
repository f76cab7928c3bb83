use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during staging-area operations.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index file could not be read.
    #[error("failed to read index {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The index file could not be written.
    #[error("failed to update index {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An index line does not have the `"<digest> <path>"` shape.
    #[error("malformed index entry at line {line}: {content:?}")]
    MalformedEntry { line: usize, content: String },
}

/// Convenience alias for staging-area results.
pub type IndexResult<T> = Result<T, IndexError>;
