//! Filesystem-backed object store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::adapter::ObjectStore;
use crate::error::{StorageError, StorageResult};

/// Object store rooted at a directory.
///
/// Keys map to relative file paths under the root; intermediate
/// directories are created on write. Keys that would escape the root
/// (absolute paths, `..` components) are rejected up front.
///
/// # Example
///
/// ```rust,no_run
/// use parspot_storage::{FsObjectStore, ObjectStore};
///
/// let store = FsObjectStore::new("/var/lib/parspot");
/// store.write("curves/2025-06-02/ytm.csv", b"...").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    root: PathBuf,
}

impl FsObjectStore {
    /// Creates a store rooted at `root`. The directory itself is created
    /// lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() {
            return Err(StorageError::invalid_key(key, "empty key"));
        }
        if key.starts_with('/') {
            return Err(StorageError::invalid_key(key, "absolute path"));
        }
        for component in key.split('/') {
            if component.is_empty() || component == "." || component == ".." {
                return Err(StorageError::invalid_key(
                    key,
                    "empty, '.' or '..' path component",
                ));
            }
        }
        Ok(self.root.join(key))
    }

    fn map_not_found(err: std::io::Error, key: &str) -> StorageError {
        if err.kind() == ErrorKind::NotFound {
            StorageError::not_found(key)
        } else {
            StorageError::Io(err)
        }
    }

    fn ensure_parent(path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl ObjectStore for FsObjectStore {
    fn backend_name(&self) -> &'static str {
        "filesystem"
    }

    fn read(&self, key: &str) -> StorageResult<Vec<u8>> {
        let path = self.resolve(key)?;
        fs::read(&path).map_err(|e| Self::map_not_found(e, key))
    }

    fn write(&self, key: &str, data: &[u8]) -> StorageResult<()> {
        let path = self.resolve(key)?;
        Self::ensure_parent(&path)?;
        fs::write(&path, data)?;
        Ok(())
    }

    fn copy(&self, src: &str, dst: &str) -> StorageResult<()> {
        let src_path = self.resolve(src)?;
        let dst_path = self.resolve(dst)?;
        Self::ensure_parent(&dst_path)?;
        fs::copy(&src_path, &dst_path).map_err(|e| Self::map_not_found(e, src))?;
        Ok(())
    }

    fn rename(&self, src: &str, dst: &str) -> StorageResult<()> {
        let src_path = self.resolve(src)?;
        let dst_path = self.resolve(dst)?;
        Self::ensure_parent(&dst_path)?;
        fs::rename(&src_path, &dst_path).map_err(|e| Self::map_not_found(e, src))
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.resolve(key)?;
        fs::remove_file(&path).map_err(|e| Self::map_not_found(e, key))
    }
}
