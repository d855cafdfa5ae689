//! Import and export of the bookmark collection as a JSON array.
//!
//! Export writes the stored collection pretty-printed. Import is
//! all-or-nothing: the input is validated completely before the stored
//! collection is replaced, and nothing is merged.

use serde_json::Value;

use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::services::metadata_fetcher::MetadataFetcher;
use crate::storage::KeyValueStore;
use crate::types::bookmark::Bookmark;
use crate::types::errors::{ImportError, StorageError};

/// Fields every imported record must carry as a non-empty string.
const REQUIRED_FIELDS: [&str; 3] = ["id", "url", "title"];

impl<S: KeyValueStore, F: MetadataFetcher> BookmarkStore<S, F> {
    /// The full stored collection as an indented UTF-8 JSON array.
    pub fn export(&self) -> Result<Vec<u8>, StorageError> {
        export_bookmarks(&self.list())
    }

    /// Replaces the stored collection with the contents of `data`.
    ///
    /// Returns the number of imported bookmarks. On any format error the
    /// stored collection is left untouched.
    pub fn import(&mut self, data: &[u8]) -> Result<usize, ImportError> {
        let bookmarks = parse_import(data)?;
        self.save(&bookmarks)?;
        log::info!("imported {} bookmarks", bookmarks.len());
        Ok(bookmarks.len())
    }
}

pub fn export_bookmarks(bookmarks: &[Bookmark]) -> Result<Vec<u8>, StorageError> {
    serde_json::to_vec_pretty(bookmarks).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Validates and decodes an exported bookmark file.
pub fn parse_import(data: &[u8]) -> Result<Vec<Bookmark>, ImportError> {
    let value: Value = serde_json::from_slice(data)
        .map_err(|e| ImportError::InvalidFormat(format!("not valid JSON: {}", e)))?;

    let items = value
        .as_array()
        .ok_or_else(|| ImportError::InvalidFormat("expected a JSON array".to_string()))?;

    for (index, item) in items.iter().enumerate() {
        for field in REQUIRED_FIELDS {
            let present = item
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|s| !s.is_empty());
            if !present {
                return Err(ImportError::InvalidFormat(format!(
                    "entry {} is missing a non-empty '{}'",
                    index, field
                )));
            }
        }
    }

    serde_json::from_value(value)
        .map_err(|e| ImportError::InvalidFormat(format!("malformed bookmark entry: {}", e)))
}
