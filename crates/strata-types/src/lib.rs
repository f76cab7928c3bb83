//! Foundation types for strata.
//!
//! This crate provides the core value types used throughout the strata
//! system. Every other strata crate depends on `strata-types`.
//!
//! # Key Types
//!
//! - [`Digest`] — Content-addressed identifier (BLAKE3 hash, 64-hex rendering)
//! - [`Identity`] — Author/committer identity (name + email)
//! - [`TypeError`] — Malformed-hash parsing failures

pub mod digest;
pub mod error;
pub mod identity;

pub use digest::{Digest, DIGEST_HEX_LEN};
pub use error::TypeError;
pub use identity::Identity;
