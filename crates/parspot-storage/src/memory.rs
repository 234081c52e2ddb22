//! In-memory object store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::adapter::ObjectStore;
use crate::error::{StorageError, StorageResult};

/// HashMap-backed object store.
///
/// Thread-safe through an `RwLock`; nothing survives the process. Useful
/// for tests and development.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.read().unwrap().len()
    }

    /// Whether the store holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock_err(e: impl std::fmt::Display) -> StorageError {
        StorageError::Backend(format!("lock error: {e}"))
    }
}

impl ObjectStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn read(&self, key: &str) -> StorageResult<Vec<u8>> {
        self.objects
            .read()
            .map_err(Self::lock_err)?
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::not_found(key))
    }

    fn write(&self, key: &str, data: &[u8]) -> StorageResult<()> {
        self.objects
            .write()
            .map_err(Self::lock_err)?
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn copy(&self, src: &str, dst: &str) -> StorageResult<()> {
        let mut objects = self.objects.write().map_err(Self::lock_err)?;
        let data = objects
            .get(src)
            .cloned()
            .ok_or_else(|| StorageError::not_found(src))?;
        objects.insert(dst.to_string(), data);
        Ok(())
    }

    fn rename(&self, src: &str, dst: &str) -> StorageResult<()> {
        let mut objects = self.objects.write().map_err(Self::lock_err)?;
        let data = objects
            .remove(src)
            .ok_or_else(|| StorageError::not_found(src))?;
        objects.insert(dst.to_string(), data);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.objects
            .write()
            .map_err(Self::lock_err)?
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StorageError::not_found(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_round_trip() {
        let store = InMemoryStore::new();
        store.write("a/b.csv", b"payload").unwrap();

        assert_eq!(store.read("a/b.csv").unwrap(), b"payload");
        assert_eq!(store.backend_name(), "memory");
    }

    #[test]
    fn test_read_missing_is_typed() {
        let store = InMemoryStore::new();
        let err = store.read("nope").unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[test]
    fn test_copy_keeps_source() {
        let store = InMemoryStore::new();
        store.write("src", b"x").unwrap();
        store.copy("src", "dst").unwrap();

        assert_eq!(store.read("src").unwrap(), b"x");
        assert_eq!(store.read("dst").unwrap(), b"x");
    }

    #[test]
    fn test_rename_removes_source() {
        let store = InMemoryStore::new();
        store.write("src", b"x").unwrap();
        store.rename("src", "dst").unwrap();

        assert!(store.read("src").is_err());
        assert_eq!(store.read("dst").unwrap(), b"x");
    }

    #[test]
    fn test_remove() {
        let store = InMemoryStore::new();
        store.write("k", b"x").unwrap();
        store.remove("k").unwrap();

        assert!(store.read("k").is_err());
        assert!(matches!(
            store.remove("k"),
            Err(StorageError::NotFound { .. })
        ));
    }

    #[test]
    fn test_write_overwrites() {
        let store = InMemoryStore::new();
        store.write("k", b"old").unwrap();
        store.write("k", b"new").unwrap();

        assert_eq!(store.read("k").unwrap(), b"new");
        assert_eq!(store.len(), 1);
    }
}
