//! Tests for the key-value storage backends.
//!
//! Every backend must satisfy the same slot contract; the file-backed ones
//! must also survive being reopened.

use rstest::rstest;
use tempfile::TempDir;

use vidmarks::storage::{open_backend, JsonFileStore, KeyValueStore, MemoryStore, SqliteStore};
use vidmarks::types::errors::StorageError;
use vidmarks::types::settings::StorageBackend;

fn exercise_slot_contract(store: &mut dyn KeyValueStore) {
    assert_eq!(store.get("ytBookmarks").unwrap(), None, "fresh slot must be empty");

    store.set("ytBookmarks", "[]").unwrap();
    assert_eq!(store.get("ytBookmarks").unwrap().as_deref(), Some("[]"));

    store.set("ytBookmarks", r#"[{"id":"1"}]"#).unwrap();
    assert_eq!(
        store.get("ytBookmarks").unwrap().as_deref(),
        Some(r#"[{"id":"1"}]"#),
        "set must replace, not append"
    );

    assert_eq!(store.get("other").unwrap(), None, "slots are independent");
}

#[test]
fn test_memory_store_contract() {
    exercise_slot_contract(&mut MemoryStore::new());
}

#[test]
fn test_sqlite_store_contract() {
    exercise_slot_contract(&mut SqliteStore::open_in_memory().unwrap());
}

#[test]
fn test_json_file_store_contract() {
    let dir = TempDir::new().unwrap();
    exercise_slot_contract(&mut JsonFileStore::new(dir.path().join("slots")));
}

#[test]
fn test_sqlite_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vidmarks.db");
    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.set("ytBookmarks", "[1,2,3]").unwrap();
    }
    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get("ytBookmarks").unwrap().as_deref(), Some("[1,2,3]"));
}

#[test]
fn test_json_file_store_writes_plain_file() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(dir.path());
    store.set("ytBookmarks", "[]").unwrap();

    let content = std::fs::read_to_string(dir.path().join("ytBookmarks.json")).unwrap();
    assert_eq!(content, "[]");
    assert!(
        !dir.path().join("ytBookmarks.json.tmp").exists(),
        "temp file must be renamed away"
    );
}

#[test]
fn test_json_file_store_keeps_one_file_per_slot() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("slots"));
    store.set("ytBookmarks", r#"[{"id":"1"}]"#).unwrap();
    store.set("marks", "[]").unwrap();

    let mut files: Vec<String> = std::fs::read_dir(dir.path().join("slots"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    assert_eq!(files, vec!["marks.json", "ytBookmarks.json"]);

    let raw = std::fs::read_to_string(dir.path().join("slots").join("ytBookmarks.json")).unwrap();
    assert_eq!(raw, r#"[{"id":"1"}]"#, "slot value is stored verbatim");
}

#[test]
fn test_sqlite_store_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("vidmarks.db");
    SqliteStore::open(&path).expect("open should create missing parents");
    assert!(path.exists());
}

#[test]
fn test_sqlite_store_reports_unusable_directory() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();

    let result = SqliteStore::open(blocker.join("sub").join("vidmarks.db"));
    assert!(
        matches!(result, Err(StorageError::Io(_))),
        "a parent that cannot be created must surface as an I/O error"
    );
}

#[rstest]
#[case(StorageBackend::Sqlite, "vidmarks.db")]
#[case(StorageBackend::Json, "slots")]
#[case(StorageBackend::Memory, "unused")]
fn test_open_backend_roundtrip(#[case] backend: StorageBackend, #[case] name: &str) {
    let dir = TempDir::new().unwrap();
    let mut store = open_backend(backend, &dir.path().join(name)).unwrap();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}
