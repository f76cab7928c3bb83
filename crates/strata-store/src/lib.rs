//! Content-addressed object storage for strata.
//!
//! This crate implements a hash-keyed object store analogous to git's
//! `.git/objects/` directory. Every piece of data in strata -- file
//! snapshots, directory snapshots, commit metadata -- is stored as an
//! immutable object identified by the BLAKE3 hash of its canonical
//! encoding `"<kind> <len>\0<body>"`.
//!
//! # Object Kinds
//!
//! - `blob` -- raw file content
//! - `tree` -- ordered directory listing
//! - `commit` -- commit metadata record
//!
//! # Storage Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`FsObjectStore`] -- compressed loose objects under a two-level
//!   sharded directory layout; the authoritative backend
//! - [`InMemoryObjectStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Objects are immutable once written (content-addressing guarantees this).
//! 2. Writes are idempotent: at most one physical write per digest.
//! 3. Object files become visible only via atomic rename; a failed write
//!    never leaves a partial file under its final name.
//! 4. Concurrent reads are always safe (objects are immutable).
//! 5. All I/O errors are propagated, never silently ignored.

pub mod codec;
pub mod error;
pub mod fs;
pub mod memory;
pub mod object;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use codec::{compress, decompress, CodecError};
pub use error::{StoreError, StoreResult};
pub use fs::FsObjectStore;
pub use memory::InMemoryObjectStore;
pub use object::{Object, ObjectKind};
pub use traits::ObjectStore;
