//! Staging area for strata.
//!
//! The staging area is an append-only, ordered queue of
//! `(hex digest, path)` pairs scheduled for the next commit. It is the
//! durable source of truth for what the next tree will contain: entries
//! keep their append order, duplicates are preserved verbatim, and the
//! queue is only cleared after a commit completes.
//!
//! Digest strings are kept as text here; converting them to binary (and
//! rejecting malformed ones) is the tree builder's job.
//!
//! # Backends
//!
//! All backends implement the [`StagingArea`] trait:
//!
//! - [`FsStagingArea`] — the on-disk index file, one entry per line
//! - [`InMemoryStagingArea`] — `Vec`-backed queue for tests and embedding

pub mod entry;
pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use entry::StagedEntry;
pub use error::{IndexError, IndexResult};
pub use fs::FsStagingArea;
pub use memory::InMemoryStagingArea;
pub use traits::StagingArea;
