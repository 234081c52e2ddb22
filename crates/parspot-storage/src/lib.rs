//! # Parspot Storage
//!
//! Object storage adapters for archiving converted curve tables.
//!
//! Persistence sits outside the curve mathematics: the pipeline computes,
//! then *may* hand its output to an [`ObjectStore`]. The trait is a
//! narrow capability interface - read, write, copy, rename, remove - with
//! typed errors, so a failed read can never masquerade as an
//! empty-but-valid object. Two backends ship here:
//!
//! - [`InMemoryStore`]: HashMap-backed, for tests and development
//! - [`FsObjectStore`]: directory-rooted files, the local counterpart of
//!   a bucket store
//!
//! ## Example
//!
//! ```rust
//! use parspot_storage::{InMemoryStore, ObjectStore};
//!
//! let store = InMemoryStore::new();
//! store.write("curves/2025/spot.csv", b"Date,365\n2025-06-02,0.0301\n").unwrap();
//! store.rename("curves/2025/spot.csv", "curves/2025/spot-final.csv").unwrap();
//!
//! let bytes = store.read("curves/2025/spot-final.csv").unwrap();
//! assert!(bytes.starts_with(b"Date"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod adapter;
mod fs;
mod memory;

pub mod error;

pub use adapter::ObjectStore;
pub use error::{StorageError, StorageResult};
pub use fs::FsObjectStore;
pub use memory::InMemoryStore;
