use vidmarks::types::errors::*;

// === StorageError Tests ===

#[test]
fn storage_error_display_variants() {
    assert_eq!(
        StorageError::Io("disk full".to_string()).to_string(),
        "Storage I/O error: disk full"
    );
    assert_eq!(
        StorageError::Database("locked".to_string()).to_string(),
        "Storage database error: locked"
    );
    assert_eq!(
        StorageError::Serialization("bad utf-8".to_string()).to_string(),
        "Storage serialization error: bad utf-8"
    );
}

#[test]
fn storage_error_from_rusqlite() {
    let err: StorageError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, StorageError::Database(_)));
}

// === AddError Tests ===

#[test]
fn add_error_display_variants() {
    assert_eq!(
        AddError::InvalidUrl("https://vimeo.com/1".to_string()).to_string(),
        "Invalid video URL: https://vimeo.com/1"
    );
    assert_eq!(
        AddError::MetadataUnavailable("abc".to_string()).to_string(),
        "Metadata unavailable for video: abc"
    );
    assert_eq!(
        AddError::DuplicateBookmark("abc".to_string()).to_string(),
        "Bookmark already exists for video: abc"
    );
    assert_eq!(
        AddError::StorageError("read-only".to_string()).to_string(),
        "Bookmark storage error: read-only"
    );
}

#[test]
fn add_error_user_messages() {
    assert_eq!(AddError::InvalidUrl(String::new()).user_message(), "Invalid YouTube URL");
    assert_eq!(
        AddError::MetadataUnavailable(String::new()).user_message(),
        "Could not fetch video title"
    );
    assert_eq!(
        AddError::DuplicateBookmark(String::new()).user_message(),
        "Bookmark already exists"
    );
}

#[test]
fn add_error_from_storage_error() {
    let err: AddError = StorageError::Io("gone".to_string()).into();
    assert!(matches!(err, AddError::StorageError(msg) if msg.contains("gone")));
}

// === ImportError Tests ===

#[test]
fn import_error_display_variants() {
    assert_eq!(
        ImportError::InvalidFormat("expected a JSON array".to_string()).to_string(),
        "Invalid import format: expected a JSON array"
    );
    assert_eq!(
        ImportError::StorageError("locked".to_string()).to_string(),
        "Import storage error: locked"
    );
    assert_eq!(
        ImportError::InvalidFormat(String::new()).user_message(),
        "Invalid bookmark file format"
    );
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("denied".to_string()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::SerializationError("eof".to_string()).to_string(),
        "Settings serialization error: eof"
    );
    assert_eq!(
        SettingsError::InvalidKey("nope".to_string()).to_string(),
        "Invalid settings key: nope"
    );
    assert_eq!(
        SettingsError::InvalidValue("bad".to_string()).to_string(),
        "Invalid settings value: bad"
    );
}

#[test]
fn errors_implement_error_trait() {
    let errs: Vec<Box<dyn std::error::Error>> = vec![
        Box::new(StorageError::Io("x".to_string())),
        Box::new(AddError::InvalidUrl("x".to_string())),
        Box::new(ImportError::InvalidFormat("x".to_string())),
        Box::new(SettingsError::InvalidKey("x".to_string())),
    ];
    for err in errs {
        assert!(err.source().is_none());
    }
}
