//! Commit objects: encoding, decoding, and chain-advancing construction.
//!
//! A commit body is newline-joined text:
//!
//! ```text
//! tree <hex>
//! parent <hex>        (absent for the first commit on a branch)
//! author <name> <email>
//! committer <name> <email>
//! <message, verbatim>
//! ```
//!
//! The message follows the `committer` line directly, with no blank-line
//! separator and no trailing-newline normalization.

use tracing::debug;

use strata_refs::RefStore;
use strata_store::{Object, ObjectKind, ObjectStore, StoreError};
use strata_types::{Digest, Identity};

use crate::error::RepoResult;

/// A fully decoded commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitRecord {
    /// Digest of the commit object itself.
    pub id: Digest,
    /// Digest of the directory snapshot this commit captures.
    pub tree: Digest,
    /// Digest of the parent commit; `None` for the root commit.
    pub parent: Option<Digest>,
    /// Author line payload, `<name> <email>`.
    pub author: String,
    /// Committer line payload; identical to the author in practice.
    pub committer: String,
    /// Commit message, verbatim.
    pub message: String,
}

/// Assemble a commit body from its parts.
pub(crate) fn encode_commit(
    tree: &Digest,
    parent: Option<&Digest>,
    author: &Identity,
    message: &str,
) -> Vec<u8> {
    let mut body = format!("tree {}\n", tree.to_hex());
    if let Some(parent) = parent {
        body.push_str(&format!("parent {}\n", parent.to_hex()));
    }
    body.push_str(&format!("author {author}\n"));
    body.push_str(&format!("committer {author}\n"));
    body.push_str(message);
    body.into_bytes()
}

/// Decode a stored object as a commit.
///
/// Fails with [`StoreError::Corrupt`] if the object is not a commit or
/// its body does not have the expected line structure.
pub(crate) fn decode_commit(object: &Object, id: &Digest) -> RepoResult<CommitRecord> {
    let corrupt = |reason: String| StoreError::Corrupt { id: *id, reason };

    if object.kind != ObjectKind::Commit {
        return Err(corrupt(format!("expected commit, got {}", object.kind)).into());
    }

    let text = std::str::from_utf8(&object.body)
        .map_err(|_| corrupt("commit body is not valid UTF-8".to_string()))?;

    let (tree_line, rest) = take_line(text);
    let tree_hex = tree_line
        .strip_prefix("tree ")
        .ok_or_else(|| corrupt(format!("expected tree line, got {tree_line:?}")))?;
    let tree = Digest::from_hex(tree_hex)
        .map_err(|e| corrupt(format!("bad tree digest: {e}")))?;

    let (parent, rest) = match rest.strip_prefix("parent ") {
        Some(after) => {
            let (parent_hex, rest) = take_line(after);
            let parent = Digest::from_hex(parent_hex)
                .map_err(|e| corrupt(format!("bad parent digest: {e}")))?;
            (Some(parent), rest)
        }
        None => (None, rest),
    };

    let (author_line, rest) = take_line(rest);
    let author = author_line
        .strip_prefix("author ")
        .ok_or_else(|| corrupt(format!("expected author line, got {author_line:?}")))?;

    let (committer_line, message) = take_line(rest);
    let committer = committer_line
        .strip_prefix("committer ")
        .ok_or_else(|| corrupt(format!("expected committer line, got {committer_line:?}")))?;

    Ok(CommitRecord {
        id: *id,
        tree,
        parent,
        author: author.to_string(),
        committer: committer.to_string(),
        message: message.to_string(),
    })
}

/// Split off the first line; the remainder keeps everything after the
/// newline untouched.
fn take_line(text: &str) -> (&str, &str) {
    match text.split_once('\n') {
        Some((line, rest)) => (line, rest),
        None => (text, ""),
    }
}

/// Build a commit object linking `tree` to the current branch tip, then
/// advance the branch pointer to the new commit.
///
/// A non-empty branch pointer becomes the parent. The pointer update is
/// the final step: if it fails, [`RefError::PointerWriteFailed`] surfaces
/// and the previous pointer remains valid -- the new commit object is
/// durable but unreachable from the branch.
///
/// [`RefError::PointerWriteFailed`]: strata_refs::RefError::PointerWriteFailed
pub fn build_commit(
    store: &dyn ObjectStore,
    refs: &dyn RefStore,
    tree: &Digest,
    message: &str,
    author: &Identity,
) -> RepoResult<Digest> {
    let branch = refs.current_branch()?;
    let parent = refs.read_branch(&branch)?;

    let body = encode_commit(tree, parent.as_ref(), author, message);
    let id = store.put(ObjectKind::Commit, &body)?;

    refs.write_branch(&branch, &id)?;

    debug!(commit = %id, branch = %branch, parent = ?parent.map(|p| p.short_hex()), "commit created");
    Ok(id)
}
