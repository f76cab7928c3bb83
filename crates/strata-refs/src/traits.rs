use strata_types::Digest;

use crate::error::Result;

/// Storage backend for the branch pointer and symbolic HEAD.
///
/// Branch names are canonical relative paths (e.g. `refs/heads/main`),
/// exactly as they appear inside the symbolic ref file.
pub trait RefStore: Send + Sync {
    /// Resolve the symbolic HEAD to the current branch name.
    fn current_branch(&self) -> Result<String>;

    /// Read a branch pointer.
    ///
    /// Returns `Ok(None)` when the branch exists but holds no commit yet
    /// (a freshly initialized repository). A missing pointer file is
    /// [`RefError::NotFound`].
    ///
    /// [`RefError::NotFound`]: crate::RefError::NotFound
    fn read_branch(&self, name: &str) -> Result<Option<Digest>>;

    /// Overwrite a branch pointer with a new commit digest.
    ///
    /// The update must be atomic: the pointer is either the old digest or
    /// the new one, never a partial write.
    fn write_branch(&self, name: &str, digest: &Digest) -> Result<()>;
}
