//! Filesystem-backed reference store.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use strata_types::Digest;

use crate::error::{RefError, Result};
use crate::traits::RefStore;

/// Name of the symbolic ref file.
const HEAD_FILE: &str = "HEAD";

/// Prefix introducing the branch path inside the symbolic ref file.
const SYMREF_PREFIX: &str = "ref: ";

/// Filesystem implementation of [`RefStore`].
///
/// Rooted at the repository directory (e.g. `.strata`); branch names are
/// resolved relative to it.
#[derive(Debug)]
pub struct FsRefStore {
    repo_dir: PathBuf,
}

impl FsRefStore {
    /// Create a ref store rooted at the repository directory.
    pub fn new<P: AsRef<Path>>(repo_dir: P) -> Self {
        Self {
            repo_dir: repo_dir.as_ref().to_path_buf(),
        }
    }

    fn branch_path(&self, name: &str) -> PathBuf {
        self.repo_dir.join(name)
    }
}

impl RefStore for FsRefStore {
    fn current_branch(&self) -> Result<String> {
        let head_path = self.repo_dir.join(HEAD_FILE);
        let contents = match fs::read_to_string(&head_path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(RefError::NotFound {
                    name: HEAD_FILE.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let line = contents.trim();
        match line.strip_prefix(SYMREF_PREFIX) {
            Some(branch) if !branch.is_empty() => Ok(branch.to_string()),
            _ => Err(RefError::MalformedSymbolicRef {
                content: line.to_string(),
            }),
        }
    }

    fn read_branch(&self, name: &str) -> Result<Option<Digest>> {
        let contents = match fs::read_to_string(self.branch_path(name)) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(RefError::NotFound {
                    name: name.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let hex = contents.trim();
        if hex.is_empty() {
            return Ok(None);
        }
        let digest = Digest::from_hex(hex).map_err(|e| RefError::MalformedPointer {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(digest))
    }

    fn write_branch(&self, name: &str, digest: &Digest) -> Result<()> {
        let pointer_write_failed = |source: io::Error| RefError::PointerWriteFailed {
            name: name.to_string(),
            source,
        };

        // Temp-file + rename keeps the pointer either old or new, never a
        // partial write.
        let mut tmp = NamedTempFile::new_in(&self.repo_dir).map_err(pointer_write_failed)?;
        tmp.write_all(digest.to_hex().as_bytes())
            .map_err(pointer_write_failed)?;
        tmp.persist(self.branch_path(name))
            .map_err(|e| pointer_write_failed(e.error))?;

        debug!(branch = name, digest = %digest, "branch pointer updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    /// Scaffold the ref layout the way repository initialization does.
    fn ref_store_in(dir: &TempDir) -> FsRefStore {
        fs::create_dir_all(dir.path().join("refs/heads")).unwrap();
        fs::write(dir.path().join("HEAD"), "ref: refs/heads/main").unwrap();
        fs::write(dir.path().join("refs/heads/main"), "").unwrap();
        FsRefStore::new(dir.path())
    }

    #[test]
    fn head_resolves_to_the_branch_path() {
        let dir = TempDir::new().unwrap();
        let refs = ref_store_in(&dir);
        assert_eq!(refs.current_branch().unwrap(), "refs/heads/main");
    }

    #[test]
    fn missing_head_is_not_found() {
        let dir = TempDir::new().unwrap();
        let refs = FsRefStore::new(dir.path());
        assert!(matches!(
            refs.current_branch(),
            Err(RefError::NotFound { .. })
        ));
    }

    #[test]
    fn malformed_head_is_rejected() {
        let dir = TempDir::new().unwrap();
        let refs = ref_store_in(&dir);
        fs::write(dir.path().join("HEAD"), "not a symref").unwrap();
        assert!(matches!(
            refs.current_branch(),
            Err(RefError::MalformedSymbolicRef { .. })
        ));
    }

    #[test]
    fn empty_pointer_means_no_commits() {
        let dir = TempDir::new().unwrap();
        let refs = ref_store_in(&dir);
        assert!(refs.read_branch("refs/heads/main").unwrap().is_none());
    }

    #[test]
    fn pointer_roundtrip() {
        let dir = TempDir::new().unwrap();
        let refs = ref_store_in(&dir);

        let digest = Digest::from_bytes(b"a commit");
        refs.write_branch("refs/heads/main", &digest).unwrap();
        assert_eq!(refs.read_branch("refs/heads/main").unwrap(), Some(digest));
    }

    #[test]
    fn pointer_file_holds_exactly_the_hex_digest() {
        let dir = TempDir::new().unwrap();
        let refs = ref_store_in(&dir);

        let digest = Digest::from_bytes(b"a commit");
        refs.write_branch("refs/heads/main", &digest).unwrap();
        let raw = fs::read_to_string(dir.path().join("refs/heads/main")).unwrap();
        assert_eq!(raw, digest.to_hex());
    }

    #[test]
    fn overwrite_replaces_the_previous_pointer() {
        let dir = TempDir::new().unwrap();
        let refs = ref_store_in(&dir);

        let first = Digest::from_bytes(b"first");
        let second = Digest::from_bytes(b"second");
        refs.write_branch("refs/heads/main", &first).unwrap();
        refs.write_branch("refs/heads/main", &second).unwrap();
        assert_eq!(refs.read_branch("refs/heads/main").unwrap(), Some(second));
    }

    #[test]
    fn missing_pointer_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let refs = ref_store_in(&dir);
        assert!(matches!(
            refs.read_branch("refs/heads/other"),
            Err(RefError::NotFound { .. })
        ));
    }

    #[test]
    fn garbage_pointer_is_malformed() {
        let dir = TempDir::new().unwrap();
        let refs = ref_store_in(&dir);
        fs::write(dir.path().join("refs/heads/main"), "not-a-digest").unwrap();
        assert!(matches!(
            refs.read_branch("refs/heads/main"),
            Err(RefError::MalformedPointer { .. })
        ));
    }

    #[test]
    fn write_to_unwritable_location_is_pointer_write_failed() {
        let dir = TempDir::new().unwrap();
        let refs = ref_store_in(&dir);
        // The parent directory for this branch name does not exist, so the
        // final rename cannot succeed.
        let digest = Digest::from_bytes(b"x");
        let result = refs.write_branch("refs/heads/missing-dir/main", &digest);
        assert!(matches!(
            result,
            Err(RefError::PointerWriteFailed { .. })
        ));
    }
}
