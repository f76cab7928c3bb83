use strata_types::Digest;

use crate::codec::CodecError;

/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested object was not found.
    #[error("object not found: {0}")]
    NotFound(Digest),

    /// The object data is malformed: decompression failed, the header is
    /// unparseable, or the declared length disagrees with the body.
    #[error("corrupt object {id}: {reason}")]
    Corrupt { id: Digest, reason: String },

    /// Compression failure while writing an object.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
