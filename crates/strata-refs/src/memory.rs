//! In-memory reference store for testing and ephemeral use.

use std::collections::HashMap;
use std::sync::RwLock;

use strata_types::Digest;

use crate::error::{RefError, Result};
use crate::traits::RefStore;

/// An in-memory implementation of [`RefStore`].
///
/// Created with a single empty branch that HEAD points at, matching the
/// state of a freshly initialized repository.
#[derive(Debug)]
pub struct InMemoryRefStore {
    head: RwLock<String>,
    branches: RwLock<HashMap<String, Option<Digest>>>,
}

impl InMemoryRefStore {
    /// Default branch name, matching the filesystem layout.
    pub const DEFAULT_BRANCH: &'static str = "refs/heads/main";

    /// Create a store with an empty default branch.
    pub fn new() -> Self {
        let mut branches = HashMap::new();
        branches.insert(Self::DEFAULT_BRANCH.to_string(), None);
        Self {
            head: RwLock::new(Self::DEFAULT_BRANCH.to_string()),
            branches: RwLock::new(branches),
        }
    }
}

impl Default for InMemoryRefStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RefStore for InMemoryRefStore {
    fn current_branch(&self) -> Result<String> {
        Ok(self.head.read().expect("lock poisoned").clone())
    }

    fn read_branch(&self, name: &str) -> Result<Option<Digest>> {
        let branches = self.branches.read().expect("lock poisoned");
        branches
            .get(name)
            .copied()
            .ok_or_else(|| RefError::NotFound {
                name: name.to_string(),
            })
    }

    fn write_branch(&self, name: &str, digest: &Digest) -> Result<()> {
        let mut branches = self.branches.write().expect("lock poisoned");
        branches.insert(name.to_string(), Some(*digest));
        Ok(())
    }
}
