//! Metadata lookup for video bookmarks.
//!
//! Queries an oEmbed-style endpoint (noembed by default) for a video's display
//! title and thumbnail. Every failure mode collapses to `None`; the cause is
//! only logged.

use std::future::Future;

use serde::Deserialize;

use crate::services::video_id::VideoId;
use crate::types::bookmark::VideoMetadata;
use crate::types::settings::MetadataSettings;

/// Trait defining the metadata lookup used when a bookmark is created.
pub trait MetadataFetcher {
    fn fetch_metadata(
        &self,
        video_id: &VideoId,
    ) -> impl Future<Output = Option<VideoMetadata>> + Send;
}

/// Body returned by the oEmbed endpoint. Failures carry `error` instead of
/// the display fields.
#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: Option<String>,
    thumbnail_url: Option<String>,
    error: Option<String>,
}

impl OEmbedResponse {
    fn into_metadata(self) -> Option<VideoMetadata> {
        if self.error.is_some() {
            return None;
        }
        let title = self.title.filter(|t| !t.trim().is_empty())?;
        Some(VideoMetadata {
            title,
            thumbnail_url: self.thumbnail_url.unwrap_or_default(),
        })
    }
}

/// `MetadataFetcher` backed by an HTTP client against a noembed-compatible endpoint.
pub struct NoembedFetcher {
    client: reqwest::Client,
    endpoint: String,
    watch_url_base: String,
}

impl NoembedFetcher {
    pub fn new(settings: &MetadataSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: settings.endpoint.clone(),
            watch_url_base: settings.watch_url_base.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for NoembedFetcher {
    fn default() -> Self {
        Self::new(&MetadataSettings::default())
    }
}

impl MetadataFetcher for NoembedFetcher {
    async fn fetch_metadata(&self, video_id: &VideoId) -> Option<VideoMetadata> {
        let watch_url = format!("{}{}", self.watch_url_base, video_id);
        log::debug!("fetching metadata for {} from {}", video_id, self.endpoint);

        let response = match self
            .client
            .get(&self.endpoint)
            .query(&[("url", watch_url.as_str())])
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                log::warn!("metadata request for {} failed: {}", video_id, e);
                return None;
            }
        };

        if !response.status().is_success() {
            log::warn!(
                "metadata request for {} returned status {}",
                video_id,
                response.status()
            );
            return None;
        }

        match response.json::<OEmbedResponse>().await {
            Ok(body) => {
                if let Some(err) = &body.error {
                    log::warn!("metadata service reported error for {}: {}", video_id, err);
                }
                body.into_metadata()
            }
            Err(e) => {
                log::warn!("metadata response for {} was not valid JSON: {}", video_id, e);
                None
            }
        }
    }
}
