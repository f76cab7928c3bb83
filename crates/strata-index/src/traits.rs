use crate::entry::StagedEntry;
use crate::error::IndexResult;

/// Durable queue of entries scheduled for the next commit.
///
/// Implementations must preserve append order and keep duplicate paths
/// verbatim: every append adds an entry, and a tree built from duplicate
/// paths will contain duplicate entries. The queue is cleared only after
/// a commit completes.
pub trait StagingArea: Send + Sync {
    /// Append an entry to the end of the queue.
    fn append(&self, entry: &StagedEntry) -> IndexResult<()>;

    /// All entries in append order.
    fn entries(&self) -> IndexResult<Vec<StagedEntry>>;

    /// Empty the queue.
    fn clear(&self) -> IndexResult<()>;

    /// Returns `true` if nothing is staged.
    fn is_empty(&self) -> IndexResult<bool> {
        Ok(self.entries()?.is_empty())
    }
}
