use std::fmt;

// === StorageError ===

/// Errors raised by a key-value storage backend.
#[derive(Debug)]
pub enum StorageError {
    /// An I/O error occurred while reading or writing a storage file.
    Io(String),
    /// Database operation failed.
    Database(String),
    /// Failed to serialize or deserialize stored data.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "Storage I/O error: {}", msg),
            StorageError::Database(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}

// === AddError ===

/// Errors returned when adding a bookmark.
#[derive(Debug)]
pub enum AddError {
    /// The input is not a recognizable video URL.
    InvalidUrl(String),
    /// The metadata service returned nothing usable for the video.
    MetadataUnavailable(String),
    /// A bookmark for the same video already exists.
    DuplicateBookmark(String),
    /// The updated collection could not be persisted.
    StorageError(String),
}

impl AddError {
    /// Short message suitable for showing to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            AddError::InvalidUrl(_) => "Invalid YouTube URL",
            AddError::MetadataUnavailable(_) => "Could not fetch video title",
            AddError::DuplicateBookmark(_) => "Bookmark already exists",
            AddError::StorageError(_) => "Could not save bookmarks",
        }
    }
}

impl fmt::Display for AddError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddError::InvalidUrl(url) => write!(f, "Invalid video URL: {}", url),
            AddError::MetadataUnavailable(id) => {
                write!(f, "Metadata unavailable for video: {}", id)
            }
            AddError::DuplicateBookmark(id) => {
                write!(f, "Bookmark already exists for video: {}", id)
            }
            AddError::StorageError(msg) => write!(f, "Bookmark storage error: {}", msg),
        }
    }
}

impl std::error::Error for AddError {}

impl From<StorageError> for AddError {
    fn from(e: StorageError) -> Self {
        AddError::StorageError(e.to_string())
    }
}

// === ImportError ===

/// Errors returned when importing a bookmark file.
#[derive(Debug)]
pub enum ImportError {
    /// The input is not a JSON array of valid bookmark records.
    InvalidFormat(String),
    /// The imported collection could not be persisted.
    StorageError(String),
}

impl ImportError {
    /// Short message suitable for showing to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ImportError::InvalidFormat(_) => "Invalid bookmark file format",
            ImportError::StorageError(_) => "Could not save bookmarks",
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::InvalidFormat(msg) => write!(f, "Invalid import format: {}", msg),
            ImportError::StorageError(msg) => write!(f, "Import storage error: {}", msg),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<StorageError> for ImportError {
    fn from(e: StorageError) -> Self {
        ImportError::StorageError(e.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
