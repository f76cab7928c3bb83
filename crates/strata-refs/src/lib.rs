//! Reference management for strata.
//!
//! A branch pointer is a mutable reference to the latest commit digest on
//! a branch; it is the entry point into the hash-linked commit chain. HEAD
//! is a symbolic ref naming which branch pointer is current. Only one
//! branch is used in practice, but the indirection is preserved.
//!
//! # Layout
//!
//! - `HEAD` holds `ref: <relative-path-to-branch-pointer>`
//!   (e.g. `ref: refs/heads/main`)
//! - the branch pointer file holds one 64-character hex digest, and is
//!   empty for a repository with no commits
//!
//! # Backends
//!
//! All backends implement the [`RefStore`] trait:
//!
//! - [`FsRefStore`] — HEAD + pointer files under the repository directory
//! - [`InMemoryRefStore`] — `HashMap`-backed store for tests

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use error::{RefError, Result};
pub use fs::FsRefStore;
pub use memory::InMemoryRefStore;
pub use traits::RefStore;
