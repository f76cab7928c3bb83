use strata_types::Digest;

use crate::error::StoreResult;
use crate::object::{Object, ObjectKind};

/// Content-addressed object store.
///
/// All implementations must satisfy these invariants:
/// - Objects are immutable once written. Content-addressing guarantees
///   this: the same encoding always produces the same digest.
/// - `put` is idempotent: re-adding identical content is a no-op that
///   still returns the digest, and at most one physical write happens per
///   digest.
/// - A failed `put` never corrupts previously stored objects.
/// - Concurrent reads are always safe (objects are immutable).
/// - All I/O errors are propagated, never silently ignored.
pub trait ObjectStore: Send + Sync {
    /// Read an object by its content-addressed digest.
    ///
    /// Fails with [`StoreError::NotFound`] if no object with this digest
    /// exists, and with [`StoreError::Corrupt`] if the stored bytes cannot
    /// be decoded.
    ///
    /// [`StoreError::NotFound`]: crate::StoreError::NotFound
    /// [`StoreError::Corrupt`]: crate::StoreError::Corrupt
    fn get(&self, id: &Digest) -> StoreResult<Object>;

    /// Store a body under its canonical encoding and return its digest.
    ///
    /// If an object with the resulting digest already exists, the write is
    /// skipped and the digest is returned unchanged.
    fn put(&self, kind: ObjectKind, body: &[u8]) -> StoreResult<Digest>;

    /// Check whether an object exists in the store.
    fn exists(&self, id: &Digest) -> StoreResult<bool>;
}
