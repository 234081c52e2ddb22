//! Object store trait definition.

use crate::error::StorageResult;

/// Capability interface for named-blob storage.
///
/// Keys are `/`-separated paths; values are opaque bytes. All backends
/// implement the same five operations, and all report failure through
/// [`crate::StorageError`] - there is no "missing object looks like an
/// empty object" convention.
///
/// The trait is synchronous: curve conversion itself never suspends, and
/// archiving happens after the numbers exist.
pub trait ObjectStore: Send + Sync {
    /// Returns the backend name for logging.
    fn backend_name(&self) -> &'static str;

    /// Reads the object at `key`.
    ///
    /// # Errors
    ///
    /// `StorageError::NotFound` if no object exists under `key`.
    fn read(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Writes `data` under `key`, replacing any existing object.
    fn write(&self, key: &str, data: &[u8]) -> StorageResult<()>;

    /// Copies the object at `src` to `dst`.
    ///
    /// # Errors
    ///
    /// `StorageError::NotFound` if `src` does not exist.
    fn copy(&self, src: &str, dst: &str) -> StorageResult<()>;

    /// Moves the object at `src` to `dst`.
    ///
    /// # Errors
    ///
    /// `StorageError::NotFound` if `src` does not exist.
    fn rename(&self, src: &str, dst: &str) -> StorageResult<()>;

    /// Removes the object at `key`.
    ///
    /// # Errors
    ///
    /// `StorageError::NotFound` if no object exists under `key`.
    fn remove(&self, key: &str) -> StorageResult<()>;
}
