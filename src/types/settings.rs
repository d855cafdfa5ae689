use serde::{Deserialize, Serialize};

/// Top-level settings container, persisted as `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub metadata: MetadataSettings,
    pub export: ExportSettings,
}

/// Which key-value backend holds the bookmark slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Sqlite,
    Json,
    Memory,
}

/// Where and under which key bookmarks are persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Overrides the backend's default file in the data directory.
    pub path: Option<String>,
    pub slot_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            path: None,
            slot_key: "ytBookmarks".to_string(),
        }
    }
}

impl StorageSettings {
    /// Default location inside the data directory: the database file for
    /// `Sqlite`, the slot directory for `Json`.
    pub fn default_file_name(&self) -> &'static str {
        match self.backend {
            StorageBackend::Sqlite => "vidmarks.db",
            StorageBackend::Json | StorageBackend::Memory => "slots",
        }
    }
}

/// oEmbed lookup endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetadataSettings {
    pub endpoint: String,
    pub watch_url_base: String,
}

impl Default for MetadataSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://noembed.com/embed".to_string(),
            watch_url_base: "https://www.youtube.com/watch?v=".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportSettings {
    pub filename: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            filename: "youtube_bookmarks.json".to_string(),
        }
    }
}
