use serde::{Deserialize, Serialize};

use crate::services::video_id::{self, VideoId};

/// A saved reference to a video, with the user's annotations.
///
/// Every field is write-once: bookmarks are created by the store's `add`
/// operation (or wholesale by an import) and only ever removed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    /// Resolved identifier recorded at creation. Records written by older
    /// tools may lack it; see [`Bookmark::dedup_key`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<VideoId>,
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date_added: String,
}

impl Bookmark {
    /// The identifier two bookmarks must never share.
    pub fn dedup_key(&self) -> Option<VideoId> {
        match &self.video_id {
            Some(id) => Some(id.clone()),
            None => video_id::parse(&self.url),
        }
    }

    /// The stored URL with the seek offset applied, if one was saved.
    pub fn playback_url(&self) -> String {
        match self.timestamp.as_deref() {
            Some(t) if !t.is_empty() => {
                let sep = if self.url.contains('?') { '&' } else { '?' };
                format!("{}{}t={}", self.url, sep, t)
            }
            _ => self.url.clone(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Display metadata returned by the oEmbed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: String,
    pub thumbnail_url: String,
}

/// Splits a comma-separated tag string into the stored tag list.
///
/// Entries are trimmed, blanks dropped and repeats collapsed, keeping the
/// first occurrence. Case is preserved.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
