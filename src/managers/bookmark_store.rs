//! Bookmark Store for Vidmarks.
//!
//! Implements `BookmarkStoreTrait`: add, delete, list and filter video
//! bookmarks. The whole collection lives as one JSON array in a single
//! key-value slot and is rewritten on every mutation.

use std::collections::BTreeSet;
use std::future::Future;

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::services::metadata_fetcher::MetadataFetcher;
use crate::services::video_id;
use crate::storage::KeyValueStore;
use crate::types::bookmark::{normalize_tags, Bookmark};
use crate::types::errors::{AddError, StorageError};

/// Slot the collection is stored under unless configured otherwise.
pub const DEFAULT_SLOT_KEY: &str = "ytBookmarks";

/// Trait defining bookmark store operations.
pub trait BookmarkStoreTrait {
    /// All bookmarks in insertion order. Unreadable storage yields an empty list.
    fn list(&self) -> Vec<Bookmark>;
    /// Resolves, looks up and saves a new bookmark.
    fn add(
        &mut self,
        url: &str,
        timestamp: Option<&str>,
        tags: Option<&str>,
    ) -> impl Future<Output = Result<Bookmark, AddError>>;
    /// Removes the bookmark with `id`. Absent ids are not an error.
    fn delete(&mut self, id: &str) -> Result<(), StorageError>;
    /// Filtered view, most recent first.
    fn query(&self, search_term: Option<&str>, active_tag: Option<&str>) -> Vec<Bookmark>;
    /// Every tag used across the collection.
    fn distinct_tags(&self) -> BTreeSet<String>;
    fn get(&self, id: &str) -> Option<Bookmark>;
}

/// Bookmark store over a key-value backend and a metadata source.
pub struct BookmarkStore<S, F> {
    storage: S,
    fetcher: F,
    slot_key: String,
}

impl<S: KeyValueStore, F: MetadataFetcher> BookmarkStore<S, F> {
    pub fn new(storage: S, fetcher: F) -> Self {
        Self::with_slot_key(storage, fetcher, DEFAULT_SLOT_KEY)
    }

    pub fn with_slot_key(storage: S, fetcher: F, slot_key: &str) -> Self {
        Self {
            storage,
            fetcher,
            slot_key: slot_key.to_string(),
        }
    }

    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Serializes and writes the full collection, replacing the slot.
    pub(crate) fn save(&mut self, bookmarks: &[Bookmark]) -> Result<(), StorageError> {
        let json = serde_json::to_string(bookmarks)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set(&self.slot_key, &json)
    }

    fn load(&self) -> Vec<Bookmark> {
        let raw = match self.storage.get(&self.slot_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("could not read bookmark slot '{}': {}", self.slot_key, e);
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("bookmark slot '{}' is malformed, treating as empty: {}", self.slot_key, e);
            Vec::new()
        })
    }
}

impl<S: KeyValueStore, F: MetadataFetcher> BookmarkStoreTrait for BookmarkStore<S, F> {
    fn list(&self) -> Vec<Bookmark> {
        self.load()
    }

    async fn add(
        &mut self,
        url: &str,
        timestamp: Option<&str>,
        tags: Option<&str>,
    ) -> Result<Bookmark, AddError> {
        let video_id = video_id::parse(url)
            .ok_or_else(|| AddError::InvalidUrl(url.trim().to_string()))?;

        let metadata = self
            .fetcher
            .fetch_metadata(&video_id)
            .await
            .ok_or_else(|| AddError::MetadataUnavailable(video_id.to_string()))?;

        // Read after the lookup so the check sees writes made while it was pending.
        let mut bookmarks = self.load();
        if bookmarks
            .iter()
            .any(|b| b.dedup_key().as_ref() == Some(&video_id))
        {
            return Err(AddError::DuplicateBookmark(video_id.to_string()));
        }

        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            url: video_id.watch_url(),
            title: metadata.title,
            thumbnail_url: metadata.thumbnail_url,
            timestamp: timestamp
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            tags: tags.map(normalize_tags).unwrap_or_default(),
            date_added: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            video_id: Some(video_id),
        };

        bookmarks.push(bookmark.clone());
        self.save(&bookmarks)?;
        log::info!("added bookmark {} for video {}", bookmark.id, bookmark.url);
        Ok(bookmark)
    }

    fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        let mut bookmarks = self.load();
        let before = bookmarks.len();
        bookmarks.retain(|b| b.id != id);
        if bookmarks.len() == before {
            log::debug!("delete of unknown bookmark {} ignored", id);
            return Ok(());
        }
        self.save(&bookmarks)?;
        log::info!("deleted bookmark {}", id);
        Ok(())
    }

    fn query(&self, search_term: Option<&str>, active_tag: Option<&str>) -> Vec<Bookmark> {
        filter_bookmarks(self.load(), search_term, active_tag)
    }

    fn distinct_tags(&self) -> BTreeSet<String> {
        self.load().into_iter().flat_map(|b| b.tags).collect()
    }

    fn get(&self, id: &str) -> Option<Bookmark> {
        self.load().into_iter().find(|b| b.id == id)
    }
}

/// Applies the tag filter, then the search filter, and reverses to
/// most-recent-first. Blank arguments are treated as absent.
///
/// `active_tag` must equal a tag exactly. `search_term` is a case-insensitive
/// substring match against the title and each tag, so `"mus"` matches a
/// bookmark tagged `music`.
pub fn filter_bookmarks(
    bookmarks: Vec<Bookmark>,
    search_term: Option<&str>,
    active_tag: Option<&str>,
) -> Vec<Bookmark> {
    let tag = active_tag.map(str::trim).filter(|t| !t.is_empty());
    let term = search_term
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    let mut results: Vec<Bookmark> = bookmarks
        .into_iter()
        .filter(|b| tag.map_or(true, |t| b.has_tag(t)))
        .filter(|b| term.as_deref().map_or(true, |t| matches_term(b, t)))
        .collect();
    results.reverse();
    results
}

/// `term` must already be lowercased.
fn matches_term(bookmark: &Bookmark, term: &str) -> bool {
    bookmark.title.to_lowercase().contains(term)
        || bookmark.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}
