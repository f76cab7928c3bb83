//! The repository handle.
//!
//! [`Repository`] is an explicit value passed to every core operation,
//! replacing ambient filesystem state. It owns trait-object handles to
//! the object store, staging area, and ref store, so tests can substitute
//! the in-memory backends via [`Repository::from_parts`].

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use strata_index::{FsStagingArea, StagedEntry, StagingArea};
use strata_refs::{FsRefStore, RefStore};
use strata_store::{FsObjectStore, ObjectKind, ObjectStore};
use strata_types::{Digest, Identity};

use crate::commit::build_commit;
use crate::config;
use crate::error::{RepoError, RepoResult};
use crate::tree::build_tree;
use crate::walk::HistoryWalker;

/// Name of the repository directory under the project root.
const REPO_DIR: &str = ".strata";
/// Object store root, relative to the repository directory.
const OBJECTS_DIR: &str = "objects";
/// Staging index file, relative to the repository directory.
const INDEX_FILE: &str = "index";
/// Symbolic ref file, relative to the repository directory.
const HEAD_FILE: &str = "HEAD";
/// The single branch pointer, relative to the repository directory.
const DEFAULT_BRANCH: &str = "refs/heads/main";

/// A handle to an initialized repository.
pub struct Repository {
    root: PathBuf,
    repo_dir: PathBuf,
    store: Arc<dyn ObjectStore>,
    index: Arc<dyn StagingArea>,
    refs: Arc<dyn RefStore>,
}

impl Repository {
    /// Initialize a repository at `root`, creating the `.strata/` layout:
    /// the object store root, the ref directories, an empty staging index,
    /// an empty branch pointer, and the symbolic ref naming it.
    ///
    /// Initializing an already-initialized repository is a no-op that
    /// returns the opened handle.
    pub fn init<P: AsRef<Path>>(root: P) -> RepoResult<Self> {
        let root = root.as_ref();
        let repo_dir = root.join(REPO_DIR);

        if !repo_dir.exists() {
            fs::create_dir_all(repo_dir.join(OBJECTS_DIR))?;
            fs::create_dir_all(repo_dir.join("refs/heads"))?;
            fs::write(repo_dir.join(HEAD_FILE), format!("ref: {DEFAULT_BRANCH}"))?;
            fs::write(repo_dir.join(INDEX_FILE), "")?;
            fs::write(repo_dir.join(DEFAULT_BRANCH), "")?;
            info!(root = %root.display(), "initialized repository");
        }

        Self::open(root)
    }

    /// Open an existing repository at `root`.
    ///
    /// Fails fast with [`RepoError::NotInitialized`] when the expected
    /// layout is missing.
    pub fn open<P: AsRef<Path>>(root: P) -> RepoResult<Self> {
        let root = root.as_ref().to_path_buf();
        let repo_dir = root.join(REPO_DIR);

        let objects_dir = repo_dir.join(OBJECTS_DIR);
        let index_file = repo_dir.join(INDEX_FILE);
        if !objects_dir.is_dir() || !index_file.is_file() || !repo_dir.join(HEAD_FILE).is_file() {
            return Err(RepoError::NotInitialized(root));
        }

        Ok(Self {
            store: Arc::new(FsObjectStore::new(objects_dir)),
            index: Arc::new(FsStagingArea::new(index_file)),
            refs: Arc::new(FsRefStore::new(&repo_dir)),
            root,
            repo_dir,
        })
    }

    /// Assemble a repository from explicit store handles.
    ///
    /// This is the seam for test doubles: any combination of filesystem
    /// and in-memory backends works. `root` is only used to resolve
    /// relative paths in [`stage`](Self::stage) and to locate the config
    /// file.
    pub fn from_parts(
        root: PathBuf,
        store: Arc<dyn ObjectStore>,
        index: Arc<dyn StagingArea>,
        refs: Arc<dyn RefStore>,
    ) -> Self {
        let repo_dir = root.join(REPO_DIR);
        Self {
            root,
            repo_dir,
            store,
            index,
            refs,
        }
    }

    /// Stage the file at `path` (relative to the repository root): store
    /// its content as a blob and append the entry to the staging area.
    ///
    /// Returns the blob digest. The index entry is appended only after the
    /// object write succeeded.
    pub fn stage(&self, path: &str) -> RepoResult<Digest> {
        let contents = fs::read(self.root.join(path))?;
        self.stage_bytes(path, &contents)
    }

    /// Stage in-memory content under `path` without touching the working
    /// directory.
    pub fn stage_bytes(&self, path: &str, contents: &[u8]) -> RepoResult<Digest> {
        let digest = self.store.put(ObjectKind::Blob, contents)?;
        self.index.append(&StagedEntry::new(digest.to_hex(), path))?;
        debug!(path, blob = %digest, "staged file");
        Ok(digest)
    }

    /// Commit the staged entries with the identity from the config file.
    ///
    /// Fails with [`RepoError::MissingAuthorConfig`] when no identity is
    /// configured; the staging area is left untouched on any failure.
    pub fn commit(&self, message: &str) -> RepoResult<Digest> {
        let author = config::load_identity(&self.repo_dir)?;
        self.commit_as(message, &author)
    }

    /// Commit the staged entries as the given author.
    ///
    /// Builds the tree from the staging area in staging order, links it to
    /// the current branch tip (if any), advances the branch pointer, and
    /// only then clears the staging area. Any earlier failure leaves the
    /// previous pointer valid and the staged entries intact.
    pub fn commit_as(&self, message: &str, author: &Identity) -> RepoResult<Digest> {
        let entries = self.index.entries()?;
        let tree = build_tree(self.store.as_ref(), &entries)?;
        let id = build_commit(self.store.as_ref(), self.refs.as_ref(), &tree, message, author)?;
        self.index.clear()?;
        info!(commit = %id, tree = %tree, entries = entries.len(), "committed");
        Ok(id)
    }

    /// Walk the commit chain from the branch tip back to the root.
    ///
    /// A repository with no commits yields an empty walk.
    pub fn history(&self) -> RepoResult<HistoryWalker> {
        let branch = self.refs.current_branch()?;
        let tip = self.refs.read_branch(&branch)?;
        Ok(HistoryWalker::new(Arc::clone(&self.store), tip))
    }

    /// Write the author identity to the repository config file.
    pub fn set_identity(&self, identity: &Identity) -> RepoResult<()> {
        config::save_identity(&self.repo_dir, identity)
    }

    /// The repository root (the directory containing `.strata/`).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The object store backing this repository.
    pub fn store(&self) -> &dyn ObjectStore {
        self.store.as_ref()
    }

    /// The staging area backing this repository.
    pub fn staging(&self) -> &dyn StagingArea {
        self.index.as_ref()
    }

    /// The ref store backing this repository.
    pub fn refs(&self) -> &dyn RefStore {
        self.refs.as_ref()
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("root", &self.root)
            .finish()
    }
}
