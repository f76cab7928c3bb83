use std::collections::HashMap;
use std::sync::RwLock;

use strata_types::Digest;

use crate::error::{StoreError, StoreResult};
use crate::object::{Object, ObjectKind};
use crate::traits::ObjectStore;

/// In-memory, HashMap-based object store.
///
/// Intended for tests and embedding. All objects are held in memory behind
/// a `RwLock`. Objects are cloned on read.
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<Digest, Object>>,
}

impl InMemoryObjectStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn get(&self, id: &Digest) -> StoreResult<Object> {
        let map = self.objects.read().expect("lock poisoned");
        map.get(id).cloned().ok_or(StoreError::NotFound(*id))
    }

    fn put(&self, kind: ObjectKind, body: &[u8]) -> StoreResult<Digest> {
        let object = Object::new(kind, body.to_vec());
        let id = object.id();
        let mut map = self.objects.write().expect("lock poisoned");
        // Idempotent: if already present, skip (content-addressing
        // guarantees the same digest always maps to the same content).
        map.entry(id).or_insert(object);
        Ok(id)
    }

    fn exists(&self, id: &Digest) -> StoreResult<bool> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.contains_key(id))
    }
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryObjectStore")
            .field("object_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_and_get() {
        let store = InMemoryObjectStore::new();
        let id = store.put(ObjectKind::Blob, b"hello world").unwrap();

        let object = store.get(&id).unwrap();
        assert_eq!(object.kind, ObjectKind::Blob);
        assert_eq!(object.body, b"hello world");
    }

    #[test]
    fn same_content_produces_same_id() {
        let store = InMemoryObjectStore::new();
        let id1 = store.put(ObjectKind::Blob, b"identical content").unwrap();
        let id2 = store.put(ObjectKind::Blob, b"identical content").unwrap();
        assert_eq!(id1, id2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn different_kinds_produce_different_ids() {
        let store = InMemoryObjectStore::new();
        let blob = store.put(ObjectKind::Blob, b"same data").unwrap();
        let tree = store.put(ObjectKind::Tree, b"same data").unwrap();
        assert_ne!(blob, tree);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn get_missing_object_is_not_found() {
        let store = InMemoryObjectStore::new();
        let id = Digest::from_bytes(b"missing");
        assert!(matches!(store.get(&id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn exists_for_present_and_missing() {
        let store = InMemoryObjectStore::new();
        let id = store.put(ObjectKind::Blob, b"present").unwrap();
        assert!(store.exists(&id).unwrap());
        assert!(!store.exists(&Digest::from_bytes(b"absent")).unwrap());
    }

    #[test]
    fn stored_object_id_matches_lookup_key() {
        let store = InMemoryObjectStore::new();
        let id = store.put(ObjectKind::Blob, b"verify me").unwrap();
        assert_eq!(store.get(&id).unwrap().id(), id);
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryObjectStore::new());
        let id = store.put(ObjectKind::Blob, b"shared data").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let object = store.get(&id).unwrap();
                    assert_eq!(object.id(), id);
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let store = InMemoryObjectStore::new();
        store.put(ObjectKind::Blob, b"x").unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryObjectStore"));
        assert!(debug.contains("object_count"));
    }
}
