use std::sync::RwLock;

use crate::entry::StagedEntry;
use crate::error::IndexResult;
use crate::traits::StagingArea;

/// In-memory staging area for tests and ephemeral use.
///
/// Entries live in a `Vec` behind a `RwLock`; data is lost when the value
/// is dropped.
#[derive(Debug, Default)]
pub struct InMemoryStagingArea {
    entries: RwLock<Vec<StagedEntry>>,
}

impl InMemoryStagingArea {
    /// Create a new empty staging area.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StagingArea for InMemoryStagingArea {
    fn append(&self, entry: &StagedEntry) -> IndexResult<()> {
        self.entries
            .write()
            .expect("lock poisoned")
            .push(entry.clone());
        Ok(())
    }

    fn entries(&self) -> IndexResult<Vec<StagedEntry>> {
        Ok(self.entries.read().expect("lock poisoned").clone())
    }

    fn clear(&self) -> IndexResult<()> {
        self.entries.write().expect("lock poisoned").clear();
        Ok(())
    }
}
