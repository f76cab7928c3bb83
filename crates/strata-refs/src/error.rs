use thiserror::Error;

/// Errors that can occur during reference operations.
#[derive(Debug, Error)]
pub enum RefError {
    /// The referenced file (HEAD or a branch pointer) was not found.
    #[error("ref not found: {name}")]
    NotFound { name: String },

    /// The symbolic ref file does not have the `ref: <path>` shape.
    #[error("malformed symbolic ref: {content:?}")]
    MalformedSymbolicRef { content: String },

    /// The branch pointer file does not hold a valid digest.
    #[error("malformed branch pointer {name}: {reason}")]
    MalformedPointer { name: String, reason: String },

    /// The branch pointer update could not be persisted. The commit object
    /// it was meant to reference may already be durable but unreachable.
    #[error("failed to update branch pointer {name}")]
    PointerWriteFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error during ref operations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for ref operations.
pub type Result<T> = std::result::Result<T, RefError>;
