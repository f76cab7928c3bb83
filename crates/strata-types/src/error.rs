use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The digest string is not valid hex or has the wrong length.
    #[error("malformed hash: {0}")]
    MalformedHash(String),
}
