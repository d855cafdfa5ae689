use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::types::errors::StorageError;

/// Slot storage as plain files: slot `key` lives in `<dir>/<key>.json`.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// reader never sees a half-written slot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!("Failed to read slot '{}': {}", key, e))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            StorageError::Io(format!("Failed to create storage directory: {}", e))
        })?;

        let path = self.slot_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .map_err(|e| StorageError::Io(format!("Failed to write slot '{}': {}", key, e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StorageError::Io(format!("Failed to replace slot '{}': {}", key, e)))?;
        Ok(())
    }
}
