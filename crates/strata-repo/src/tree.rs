//! Staging-area-to-tree materialization.
//!
//! A tree object is the directory snapshot for one commit: the staged
//! entries concatenated in staging order, each as
//! `"<mode> <path>\0"` followed by the 32 raw digest bytes of the blob.
//!
//! The model is deliberately flat: no sorting, no deduplication, no
//! nested subtrees. Paths are opaque strings, so separators do not create
//! subdirectory objects, and duplicate staged paths yield duplicate
//! entries.

use tracing::debug;

use strata_index::StagedEntry;
use strata_store::{ObjectKind, ObjectStore};
use strata_types::Digest;

use crate::error::RepoResult;

/// File mode recorded for every tree entry.
pub const REGULAR_FILE_MODE: &str = "100644";

/// Build a tree object from staged entries and return its digest.
///
/// Each entry's hex digest is converted to its 32-byte binary form; a
/// string that is not exactly 64 hex characters fails with
/// [`TypeError::MalformedHash`] before anything is written.
///
/// [`TypeError::MalformedHash`]: strata_types::TypeError::MalformedHash
pub fn build_tree(store: &dyn ObjectStore, entries: &[StagedEntry]) -> RepoResult<Digest> {
    let mut body = Vec::new();
    for entry in entries {
        let digest = Digest::from_hex(&entry.digest)?;
        body.extend_from_slice(REGULAR_FILE_MODE.as_bytes());
        body.push(b' ');
        body.extend_from_slice(entry.path.as_bytes());
        body.push(0);
        body.extend_from_slice(digest.as_bytes());
    }

    let id = store.put(ObjectKind::Tree, &body)?;
    debug!(tree = %id, entries = entries.len(), "built tree");
    Ok(id)
}
