//! Key-value persistence for the bookmark collection.
//!
//! The store only needs named slots holding a serialized value, the same
//! shape as browser local storage. Backends:
//!
//! - [`SqliteStore`]: a `kv_store` table in the Vidmarks database.
//! - [`JsonFileStore`]: one `<key>.json` file per slot in a directory.
//! - [`MemoryStore`]: a `HashMap`, for tests and throwaway sessions.

pub mod json_file;
pub mod memory;
pub mod sqlite;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::path::Path;

use crate::types::errors::StorageError;
use crate::types::settings::StorageBackend;

/// Trait defining the slot storage the bookmark store persists through.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the slot is empty.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Opens the configured backend at `path`.
///
/// For `Sqlite` the path is the database file; for `Json` it is the
/// directory holding slot files. `Memory` ignores it.
pub fn open_backend(
    backend: StorageBackend,
    path: &Path,
) -> Result<Box<dyn KeyValueStore + Send>, StorageError> {
    let store: Box<dyn KeyValueStore + Send> = match backend {
        StorageBackend::Sqlite => Box::new(SqliteStore::open(path)?),
        StorageBackend::Json => Box::new(JsonFileStore::new(path)),
        StorageBackend::Memory => Box::new(MemoryStore::new()),
    };
    log::debug!("opened {:?} storage at {}", backend, path.display());
    Ok(store)
}
