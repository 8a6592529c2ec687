//! # Core Service Façade
//!
//! Wires the store, the sync engine, and the provider connectors together
//! and exposes the two operations hosts call:
//!
//! - [`FeedService::update`] runs one synchronization cycle for a service
//!   and reports the high-water mark that was in effect when the cycle
//!   started, plus the cycle's counters.
//! - [`FeedService::list_feed`] / [`FeedService::feed_document`] return the
//!   accumulated feed for a service, descending by publish time.
//!
//! HTTP routing and response formatting belong to the host; this crate ends
//! at the operation boundary.

pub mod error;

pub use error::{Result, ServiceError};
pub use core_store::{FeedItem, ServiceKind};
pub use core_sync::SyncCycle;

use bridge_native::ReqwestHttpClient;
use bridge_traits::http::HttpClient;
use core_runtime::CoreConfig;
use core_store::{create_pool, DatabaseConfig, ItemStore, SqliteItemStore};
use core_sync::SyncEngine;
use provider_soundcloud::SoundCloudConnector;
use provider_youtube::YouTubeConnector;
use std::sync::Arc;
use tracing::{info, instrument};

/// Primary façade exposed to host applications
pub struct FeedService {
    engine: Arc<SyncEngine>,
    store: Arc<dyn ItemStore>,
}

impl std::fmt::Debug for FeedService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedService").finish_non_exhaustive()
    }
}

impl FeedService {
    /// Create a service from explicit collaborators
    pub fn new(engine: Arc<SyncEngine>, store: Arc<dyn ItemStore>) -> Self {
        Self { engine, store }
    }

    /// Build the production wiring from configuration.
    ///
    /// Creates the database pool, the item store, and the sync engine, then
    /// registers a connector for every configured provider section. The
    /// supplied HTTP client is shared by all connectors. A provider section
    /// left out of the configuration stays unregistered; updating it yields
    /// an unregistered-source error rather than failing bootstrap.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the database
    /// cannot be opened and migrated.
    pub async fn bootstrap(config: &CoreConfig, http_client: Arc<dyn HttpClient>) -> Result<Self> {
        config.validate()?;

        let pool = create_pool(DatabaseConfig::new(&config.database_path)).await?;
        let store: Arc<dyn ItemStore> = Arc::new(SqliteItemStore::new(pool));
        let engine = Arc::new(SyncEngine::new(store.clone()));

        if let Some(soundcloud) = &config.soundcloud {
            let connector = SoundCloudConnector::new(
                http_client.clone(),
                soundcloud.user.clone(),
                soundcloud.client_id.clone(),
            );
            engine
                .register_source(ServiceKind::SoundCloud, Arc::new(connector))
                .await;
        }

        if let Some(youtube) = &config.youtube {
            let connector = YouTubeConnector::new(
                http_client.clone(),
                youtube.base_url.clone(),
                youtube.channel.clone(),
                youtube.api_key.clone(),
            );
            engine
                .register_source(ServiceKind::YouTube, Arc::new(connector))
                .await;
        }

        info!("Feed service bootstrapped");

        Ok(Self::new(engine, store))
    }

    /// Bootstrap with the default reqwest-backed HTTP client
    pub async fn bootstrap_native(config: &CoreConfig) -> Result<Self> {
        Self::bootstrap(config, Arc::new(ReqwestHttpClient::new())).await
    }

    /// Run one synchronization cycle for a service.
    ///
    /// The returned report carries the high-water mark observed before the
    /// cycle ran. Record-level failures show up in the report's counters and
    /// in the logs, never as an error; only a fetch failure or an
    /// unregistered source aborts the cycle.
    #[instrument(skip(self), fields(service = %service))]
    pub async fn update(&self, service: ServiceKind) -> Result<SyncCycle> {
        Ok(self.engine.synchronize(service).await?)
    }

    /// The accumulated feed for a service, descending by publish time
    pub async fn list_feed(&self, service: ServiceKind) -> Result<Vec<FeedItem>> {
        Ok(self.store.list_for_service(service).await?)
    }

    /// The accumulated feed serialized as a JSON array with the stable field
    /// names `service`, `remoteItemId`, `postTime`, `name`, `link`
    pub async fn feed_document(&self, service: ServiceKind) -> Result<String> {
        let items = self.list_feed(service).await?;
        Ok(serde_json::to_string(&items)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::error::{BridgeError, Result as BridgeResult};
    use bridge_traits::feed::{FeedSource, RawRecord};
    use bridge_traits::http::{HttpRequest, HttpResponse};
    use core_runtime::SoundCloudConfig;
    use core_store::create_test_pool;
    use core_sync::SyncError;

    struct ScriptedSource {
        records: Vec<RawRecord>,
    }

    #[async_trait]
    impl FeedSource for ScriptedSource {
        async fn fetch_current(&self) -> BridgeResult<Vec<RawRecord>> {
            Ok(self.records.clone())
        }
    }

    struct OfflineHttpClient;

    #[async_trait]
    impl bridge_traits::http::HttpClient for OfflineHttpClient {
        async fn execute(&self, _request: HttpRequest) -> BridgeResult<HttpResponse> {
            Err(BridgeError::NotAvailable("http".to_string()))
        }
    }

    fn record(id: i64, created_at: &str) -> RawRecord {
        RawRecord {
            remote_id: Some(id),
            title: Some(format!("Track {}", id)),
            permalink_url: Some(format!("https://soundcloud.example/tracks/{}", id)),
            created_at: Some(created_at.to_string()),
        }
    }

    async fn service_with_records(records: Vec<RawRecord>) -> FeedService {
        let store: Arc<dyn ItemStore> =
            Arc::new(SqliteItemStore::new(create_test_pool().await.unwrap()));
        let engine = Arc::new(SyncEngine::new(store.clone()));
        engine
            .register_source(ServiceKind::SoundCloud, Arc::new(ScriptedSource { records }))
            .await;

        FeedService::new(engine, store)
    }

    #[tokio::test]
    async fn test_update_then_feed_document() {
        let service = service_with_records(vec![
            record(1, "2024/01/01 00:00:00 +0000"),
            record(2, "2024/01/02 00:00:00 +0000"),
        ])
        .await;

        let cycle = service.update(ServiceKind::SoundCloud).await.unwrap();
        assert_eq!(cycle.since, None);
        assert_eq!(cycle.ingested, 2);

        let document = service.feed_document(ServiceKind::SoundCloud).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&document).unwrap();
        let array = parsed.as_array().unwrap();

        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["remoteItemId"], 2);
        assert_eq!(array[1]["remoteItemId"], 1);

        for element in array {
            let object = element.as_object().unwrap();
            for field in ["service", "remoteItemId", "postTime", "name", "link"] {
                assert!(object.contains_key(field), "missing field {}", field);
            }
            assert_eq!(object["service"], "soundcloud");
        }
    }

    #[tokio::test]
    async fn test_second_update_reports_ingested_mark() {
        let service = service_with_records(vec![record(2, "2024/01/02 00:00:00 +0000")]).await;

        let first = service.update(ServiceKind::SoundCloud).await.unwrap();
        assert_eq!(first.since, None);

        let second = service.update(ServiceKind::SoundCloud).await.unwrap();
        assert_eq!(
            second.since.map(|mark| mark.to_rfc3339()),
            Some("2024-01-02T00:00:00+00:00".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_partition_serializes_to_empty_array() {
        let service = service_with_records(vec![]).await;

        let document = service.feed_document(ServiceKind::YouTube).await.unwrap();
        assert_eq!(document, "[]");
    }

    #[tokio::test]
    async fn test_bootstrap_registers_only_configured_sources() {
        let config = CoreConfig::new(":memory:").with_soundcloud(SoundCloudConfig {
            user: "niewiederschlafen".to_string(),
            client_id: "abc123".to_string(),
        });

        let service = FeedService::bootstrap(&config, Arc::new(OfflineHttpClient))
            .await
            .unwrap();

        // SoundCloud is wired up to the (offline) transport, so its cycle
        // fails at the fetch step.
        let soundcloud = service.update(ServiceKind::SoundCloud).await.unwrap_err();
        assert!(matches!(soundcloud, ServiceError::Sync(SyncError::Fetch(_))));

        // YouTube was not configured, so it was never registered.
        let youtube = service.update(ServiceKind::YouTube).await.unwrap_err();
        assert!(matches!(
            youtube,
            ServiceError::Sync(SyncError::SourceNotRegistered { .. })
        ));
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_invalid_config() {
        let config = CoreConfig::new("");

        let err = FeedService::bootstrap(&config, Arc::new(OfflineHttpClient))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
    }
}
