//! History traversal along the parent-hash chain.

use std::collections::HashSet;
use std::sync::Arc;

use strata_store::{ObjectStore, StoreError};
use strata_types::Digest;

use crate::commit::{decode_commit, CommitRecord};
use crate::error::RepoResult;

/// Lazy walk from a branch tip back to the root commit.
///
/// Yields one decoded [`CommitRecord`] per step, newest first, and
/// terminates normally at the parentless root. A missing or corrupt link
/// is fatal: the error is yielded once and the walker fuses. Under the
/// linear single-parent model no digest can legitimately repeat, so a
/// revisited digest is reported as corruption rather than looping.
pub struct HistoryWalker {
    store: Arc<dyn ObjectStore>,
    next: Option<Digest>,
    visited: HashSet<Digest>,
}

impl HistoryWalker {
    /// Start a walk at the given tip; `None` yields an empty history.
    pub(crate) fn new(store: Arc<dyn ObjectStore>, tip: Option<Digest>) -> Self {
        Self {
            store,
            next: tip,
            visited: HashSet::new(),
        }
    }
}

impl Iterator for HistoryWalker {
    type Item = RepoResult<CommitRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        // `take` fuses the walker: after an error (or the root) `next`
        // stays `None`.
        let id = self.next.take()?;

        if !self.visited.insert(id) {
            return Some(Err(StoreError::Corrupt {
                id,
                reason: "parent chain revisits an already-walked commit".to_string(),
            }
            .into()));
        }

        let object = match self.store.get(&id) {
            Ok(object) => object,
            Err(e) => return Some(Err(e.into())),
        };
        let record = match decode_commit(&object, &id) {
            Ok(record) => record,
            Err(e) => return Some(Err(e)),
        };

        self.next = record.parent;
        Some(Ok(record))
    }
}
