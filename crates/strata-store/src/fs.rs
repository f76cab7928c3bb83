//! Filesystem-backed loose object storage.
//!
//! Objects live under a two-level sharded layout: the digest's first two
//! hex characters name a subdirectory, the remaining 62 name the file.
//! Files hold the zstd-compressed canonical encoding and become visible
//! only via atomic rename, so a crashed write never leaves a partial
//! object under its final name.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, trace};

use strata_types::Digest;

use crate::codec;
use crate::error::{StoreError, StoreResult};
use crate::object::{Object, ObjectKind};
use crate::traits::ObjectStore;

/// Filesystem implementation of [`ObjectStore`].
///
/// The filesystem is the source of truth; no in-memory cache is kept.
#[derive(Debug)]
pub struct FsObjectStore {
    /// Path to the objects directory (e.g. `.strata/objects`).
    objects_dir: PathBuf,
}

impl FsObjectStore {
    /// Create a store rooted at the given objects directory.
    ///
    /// The directory itself is expected to exist (repository
    /// initialization creates it); shard subdirectories are created on
    /// demand.
    pub fn new<P: AsRef<Path>>(objects_dir: P) -> Self {
        Self {
            objects_dir: objects_dir.as_ref().to_path_buf(),
        }
    }

    /// The sharded path for a digest: `<root>/<2-hex>/<62-hex>`.
    pub fn object_path(&self, id: &Digest) -> PathBuf {
        let hex = id.to_hex();
        self.objects_dir.join(&hex[..2]).join(&hex[2..])
    }
}

impl ObjectStore for FsObjectStore {
    fn get(&self, id: &Digest) -> StoreResult<Object> {
        let path = self.object_path(id);
        let compressed = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(*id));
            }
            Err(e) => return Err(e.into()),
        };

        let encoded = codec::decompress(&compressed).map_err(|e| StoreError::Corrupt {
            id: *id,
            reason: e.to_string(),
        })?;

        Object::decode(&encoded, id)
    }

    fn put(&self, kind: ObjectKind, body: &[u8]) -> StoreResult<Digest> {
        let object = Object::new(kind, body.to_vec());
        let encoded = object.encode();
        let id = Digest::from_bytes(&encoded);

        let path = self.object_path(&id);
        if path.exists() {
            trace!(id = %id, "object already present, skipping write");
            return Ok(id);
        }

        let compressed = codec::compress(&encoded)?;

        if let Some(shard) = path.parent() {
            fs::create_dir_all(shard)?;
        }

        // Write to a temporary file in the store root and rename into
        // place, so the object is never visible half-written.
        let mut tmp = NamedTempFile::new_in(&self.objects_dir)?;
        tmp.write_all(&compressed)?;
        tmp.persist(&path).map_err(|e| StoreError::Io(e.error))?;

        debug!(id = %id, kind = %kind, size = body.len(), "stored object");
        Ok(id)
    }

    fn exists(&self, id: &Digest) -> StoreResult<bool> {
        Ok(self.object_path(id).exists())
    }
}
