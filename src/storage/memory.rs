use std::collections::HashMap;

use super::KeyValueStore;
use crate::types::errors::StorageError;

/// In-memory slot storage. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with `value` already in slot `key`.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.to_string(), value.to_string());
        Self { slots }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
