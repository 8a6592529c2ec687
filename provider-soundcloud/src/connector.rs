//! SoundCloud feed connector
//!
//! Implements the `FeedSource` trait over the public SoundCloud tracks API.

use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::feed::{FeedSource, RawRecord};
use bridge_traits::http::{HttpClient, HttpRequest};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::error::SoundCloudError;
use crate::types::TrackResource;

/// SoundCloud API base URL
const SOUNDCLOUD_API_BASE: &str = "https://api.soundcloud.com";

/// Timeout for the single fetch call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// SoundCloud track-feed connector
///
/// One `fetch_current` call performs one GET against the user's tracks
/// endpoint and maps whatever page the API returns.
///
/// # Example
///
/// ```ignore
/// use provider_soundcloud::SoundCloudConnector;
/// use bridge_traits::feed::FeedSource;
///
/// let connector = SoundCloudConnector::new(http_client, "niewiederschlafen", client_id);
/// let records = connector.fetch_current().await?;
/// ```
pub struct SoundCloudConnector {
    http_client: Arc<dyn HttpClient>,
    user: String,
    client_id: String,
}

impl SoundCloudConnector {
    /// Create a new SoundCloud connector
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client implementation
    /// * `user` - account whose track feed is fetched
    /// * `client_id` - API client id, sent as a query parameter
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        user: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            user: user.into(),
            client_id: client_id.into(),
        }
    }

    fn tracks_url(&self) -> String {
        format!(
            "{}/users/{}/tracks?client_id={}",
            SOUNDCLOUD_API_BASE,
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.client_id)
        )
    }

    /// Map one wire element into a raw record.
    ///
    /// An element that cannot even be read as a track object maps to an
    /// empty record; the engine counts and skips it and the batch survives.
    fn convert_element(element: serde_json::Value) -> RawRecord {
        match serde_json::from_value::<TrackResource>(element) {
            Ok(track) => track.into(),
            Err(e) => {
                warn!(error = %e, "Skipping malformed track element");
                RawRecord::default()
            }
        }
    }
}

#[async_trait]
impl FeedSource for SoundCloudConnector {
    #[instrument(skip(self), fields(user = %self.user))]
    async fn fetch_current(&self) -> Result<Vec<RawRecord>> {
        debug!("Fetching current SoundCloud tracks");

        let request = HttpRequest::get(self.tracks_url())
            .header("Accept", "application/json")
            .timeout(REQUEST_TIMEOUT);

        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            return Err(SoundCloudError::ApiError {
                status_code: response.status,
                message: response.text().unwrap_or_default(),
            }
            .into());
        }

        let elements: Vec<serde_json::Value> =
            serde_json::from_slice(&response.body).map_err(|e| {
                SoundCloudError::ParseError(format!("Failed to parse tracks response: {}", e))
            })?;

        let records: Vec<RawRecord> = elements.into_iter().map(Self::convert_element).collect();

        info!("Fetched {} tracks from SoundCloud", records.len());

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::http::HttpResponse;
    use bytes::Bytes;
    use mockall::mock;
    use std::collections::HashMap;

    mock! {
        HttpClient {}

        #[async_trait]
        impl HttpClient for HttpClient {
            async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
        }
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: HashMap::new(),
            body: Bytes::from(body.as_bytes().to_vec()),
        }
    }

    #[tokio::test]
    async fn test_fetch_current_success() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|req| {
            assert!(req.url.contains("/users/niewiederschlafen/tracks"));
            assert!(req.url.contains("client_id=secret"));

            Ok(response(
                200,
                r#"[
                    {
                        "id": 1,
                        "title": "First",
                        "permalink_url": "https://soundcloud.com/niewiederschlafen/first",
                        "created_at": "2024/01/01 00:00:00 +0000"
                    },
                    {
                        "id": 2,
                        "title": "Second",
                        "permalink_url": "https://soundcloud.com/niewiederschlafen/second",
                        "created_at": "2024/01/02 00:00:00 +0000"
                    }
                ]"#,
            ))
        });

        let connector =
            SoundCloudConnector::new(Arc::new(mock_http), "niewiederschlafen", "secret");
        let records = connector.fetch_current().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].remote_id, Some(1));
        assert_eq!(records[1].title.as_deref(), Some("Second"));
        assert_eq!(
            records[1].created_at.as_deref(),
            Some("2024/01/02 00:00:00 +0000")
        );
    }

    #[tokio::test]
    async fn test_malformed_element_degrades_to_empty_record() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|_| {
            Ok(response(
                200,
                r#"[
                    {"id": 1, "title": "Good", "permalink_url": "https://x", "created_at": "2024/01/01 00:00:00 +0000"},
                    42
                ]"#,
            ))
        });

        let connector = SoundCloudConnector::new(Arc::new(mock_http), "user", "key");
        let records = connector.fetch_current().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].remote_id, Some(1));
        assert_eq!(records[1], RawRecord::default());
    }

    #[tokio::test]
    async fn test_partial_element_keeps_known_fields() {
        let mut mock_http = MockHttpClient::new();

        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(response(200, r#"[{"id": 7, "title": "No timestamp"}]"#)));

        let connector = SoundCloudConnector::new(Arc::new(mock_http), "user", "key");
        let records = connector.fetch_current().await.unwrap();

        assert_eq!(records[0].remote_id, Some(7));
        assert!(records[0].created_at.is_none());
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let mut mock_http = MockHttpClient::new();

        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(response(403, "invalid client id")));

        let connector = SoundCloudConnector::new(Arc::new(mock_http), "user", "key");
        assert!(connector.fetch_current().await.is_err());
    }

    #[tokio::test]
    async fn test_top_level_parse_error_is_error() {
        let mut mock_http = MockHttpClient::new();

        mock_http
            .expect_execute()
            .times(1)
            .returning(|_| Ok(response(200, "<html>not json</html>")));

        let connector = SoundCloudConnector::new(Arc::new(mock_http), "user", "key");
        assert!(connector.fetch_current().await.is_err());
    }

    #[tokio::test]
    async fn test_user_is_url_encoded() {
        let mut mock_http = MockHttpClient::new();

        mock_http.expect_execute().times(1).returning(|req| {
            assert!(req.url.contains("/users/two%20words/tracks"));
            Ok(response(200, "[]"))
        });

        let connector = SoundCloudConnector::new(Arc::new(mock_http), "two words", "key");
        let records = connector.fetch_current().await.unwrap();
        assert!(records.is_empty());
    }
}
