//! Video identifier extraction.
//!
//! Recognizes the two URL shapes a video can be shared under: the short-link
//! form (`https://youtu.be/<id>`) and the main-site form
//! (`https://www.youtube.com/watch?v=<id>`, any subdomain).

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

const SHORT_LINK_HOST: &str = "youtu.be";
const MAIN_DOMAIN: &str = "youtube.com";
const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// Canonical identifier of a single video.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch URL for this video, without any seek offset.
    pub fn watch_url(&self) -> String {
        format!("{}{}", WATCH_URL_BASE, self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts the video identifier from a URL string.
///
/// Returns `None` for malformed input, for hosts other than the short-link
/// and main domains, and when the identifier component is missing, empty or
/// contains characters outside `[A-Za-z0-9_-]`.
pub fn parse(input: &str) -> Option<VideoId> {
    let url = Url::parse(input.trim()).ok()?;
    let host = url.host_str()?.to_ascii_lowercase();

    let id = if host == SHORT_LINK_HOST {
        url.path_segments()?.next()?.to_string()
    } else if host.contains(MAIN_DOMAIN) {
        url.query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())?
    } else {
        return None;
    };

    if is_valid_id(&id) {
        Some(VideoId(id))
    } else {
        None
    }
}

/// Identifiers are non-empty runs of `[A-Za-z0-9_-]`. Anything else could
/// not be written back into a watch URL unchanged.
fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
