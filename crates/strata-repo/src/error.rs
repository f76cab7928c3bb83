use std::path::PathBuf;

use thiserror::Error;

use strata_index::IndexError;
use strata_refs::RefError;
use strata_store::StoreError;
use strata_types::TypeError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The directory does not hold an initialized repository layout.
    #[error("not a strata repository: {}", .0.display())]
    NotInitialized(PathBuf),

    /// Author identity is unavailable or incomplete.
    #[error("author identity is not configured: {0}")]
    MissingAuthorConfig(String),

    /// Object store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Staging area operation failed.
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// Ref operation failed.
    #[error("ref error: {0}")]
    Refs(#[from] RefError),

    /// A digest string could not be parsed.
    #[error(transparent)]
    Hash(#[from] TypeError),

    /// I/O error during repository operations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for repository results.
pub type RepoResult<T> = Result<T, RepoError>;
