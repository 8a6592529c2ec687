//! YouTube feed connector
//!
//! Implements the `FeedSource` trait over a configured uploads relay.

use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::feed::{FeedSource, RawRecord};
use bridge_traits::http::{HttpClient, HttpRequest};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::error::YouTubeError;
use crate::types::{UploadResource, UploadsResponse};

/// Timeout for the single fetch call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// YouTube uploads-feed connector
///
/// One `fetch_current` call performs one GET against the relay's uploads
/// endpoint for the configured channel and maps whatever page it returns.
pub struct YouTubeConnector {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    channel: String,
    api_key: String,
}

impl YouTubeConnector {
    /// Create a new YouTube connector
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client implementation
    /// * `base_url` - relay base URL, e.g. `https://relay.internal/youtube`
    /// * `channel` - channel whose uploads feed is fetched
    /// * `api_key` - relay API key, sent as a query parameter
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        channel: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            channel: channel.into(),
            api_key: api_key.into(),
        }
    }

    fn uploads_url(&self) -> String {
        format!(
            "{}/channels/{}/uploads?key={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.channel),
            urlencoding::encode(&self.api_key)
        )
    }

    /// Map one relayed element into a raw record, degrading to an empty
    /// record when the element cannot be read as an upload.
    fn convert_element(element: serde_json::Value) -> RawRecord {
        match serde_json::from_value::<UploadResource>(element) {
            Ok(upload) => upload.into(),
            Err(e) => {
                warn!(error = %e, "Skipping malformed upload element");
                RawRecord::default()
            }
        }
    }
}

#[async_trait]
impl FeedSource for YouTubeConnector {
    #[instrument(skip(self), fields(channel = %self.channel))]
    async fn fetch_current(&self) -> Result<Vec<RawRecord>> {
        debug!("Fetching current YouTube uploads");

        let request = HttpRequest::get(self.uploads_url())
            .header("Accept", "application/json")
            .timeout(REQUEST_TIMEOUT);

        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            return Err(YouTubeError::ApiError {
                status_code: response.status,
                message: response.text().unwrap_or_default(),
            }
            .into());
        }

        let envelope: UploadsResponse = serde_json::from_slice(&response.body).map_err(|e| {
            YouTubeError::ParseError(format!("Failed to parse uploads response: {}", e))
        })?;

        let records: Vec<RawRecord> = envelope
            .items
            .into_iter()
            .map(Self::convert_element)
            .collect();

        info!("Fetched {} uploads from YouTube relay", records.len());

        Ok(records)
    }
}
