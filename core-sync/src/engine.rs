//! # Sync Engine
//!
//! Orchestrates one synchronization cycle per service: read the partition's
//! high-water mark, fetch the upstream page, keep the records strictly after
//! the mark, normalize, and upsert each survivor.
//!
//! ## Statelessness
//!
//! Nothing is cached between cycles. Every cycle re-reads the mark from the
//! store, which is what makes overlapping runs and crash restarts safe: two
//! concurrent cycles for the same service may both fetch and both write, but
//! the identity-keyed upsert absorbs the overlap without duplicates. Cycles
//! for different services touch disjoint partitions and need no
//! coordination.

use crate::error::{Result, SyncError};
use crate::normalize::normalize;
use bridge_traits::feed::FeedSource;
use chrono::{DateTime, Utc};
use core_store::{ItemStore, ServiceKind};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

/// Outcome of one synchronization cycle.
///
/// `since` is the high-water mark observed before the cycle ran, reported
/// as-is to callers. The counters are the observable surface for record and
/// write failures, which degrade a cycle but never abort it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncCycle {
    pub service: ServiceKind,
    /// Mark in effect at cycle start; `None` for an empty partition
    pub since: Option<DateTime<Utc>>,
    /// Records in the fetched page
    pub fetched: usize,
    /// Items written this cycle
    pub ingested: usize,
    /// Records at or before the mark
    pub skipped: usize,
    /// Records that could not be normalized
    pub malformed: usize,
    /// Items whose write failed
    pub failed_writes: usize,
}

impl fmt::Display for SyncCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.since {
            Some(mark) => write!(
                f,
                "synchronized {}: {} new items, mark was {}",
                self.service,
                self.ingested,
                mark.to_rfc3339()
            ),
            None => write!(
                f,
                "synchronized {}: {} new items, no prior mark",
                self.service, self.ingested
            ),
        }
    }
}

/// Sync engine over the item store and the registered feed sources
pub struct SyncEngine {
    store: Arc<dyn ItemStore>,
    sources: RwLock<HashMap<ServiceKind, Arc<dyn FeedSource>>>,
}

impl SyncEngine {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self {
            store,
            sources: RwLock::new(HashMap::new()),
        }
    }

    /// Register the feed source for a service.
    ///
    /// Sources must be registered before the service can be synchronized.
    pub async fn register_source(&self, service: ServiceKind, source: Arc<dyn FeedSource>) {
        let mut sources = self.sources.write().await;
        sources.insert(service, source);
        info!("Registered feed source: {}", service);
    }

    /// Run one synchronization cycle for a service.
    ///
    /// # Errors
    ///
    /// Only two failures abort a cycle: the service has no registered source,
    /// or the upstream fetch itself fails. A mark-lookup failure degrades to
    /// "no prior mark" and the cycle proceeds; re-ingested duplicates are
    /// absorbed by the idempotent upsert. Record-level failures are logged
    /// and counted in the returned [`SyncCycle`].
    #[instrument(skip(self), fields(service = %service))]
    pub async fn synchronize(&self, service: ServiceKind) -> Result<SyncCycle> {
        let source = {
            let sources = self.sources.read().await;
            sources
                .get(&service)
                .cloned()
                .ok_or(SyncError::SourceNotRegistered { service })?
        };

        // Favor re-ingesting possible duplicates over silently skipping a
        // cycle: a failed mark lookup degrades to "no prior mark".
        let since = match self.store.latest_post_time(service).await {
            Ok(mark) => mark,
            Err(e) => {
                warn!(error = %e, "Mark lookup failed, proceeding without a mark");
                None
            }
        };

        let records = source.fetch_current().await?;

        let mut cycle = SyncCycle {
            service,
            since,
            fetched: records.len(),
            ingested: 0,
            skipped: 0,
            malformed: 0,
            failed_writes: 0,
        };

        for record in &records {
            let item = match normalize(service, record) {
                Ok(item) => item,
                Err(e) => {
                    warn!(error = %e, ?record, "Skipping record that failed to normalize");
                    cycle.malformed += 1;
                    continue;
                }
            };

            // Strictly after the mark; a record exactly at the mark is
            // assumed already persisted.
            if let Some(mark) = since {
                if item.post_time <= mark {
                    cycle.skipped += 1;
                    continue;
                }
            }

            match self.store.upsert(&item).await {
                Ok(()) => cycle.ingested += 1,
                Err(e) => {
                    error!(
                        error = %e,
                        remote_item_id = item.remote_item_id,
                        "Failed to persist item, continuing with the rest"
                    );
                    cycle.failed_writes += 1;
                }
            }
        }

        info!(
            fetched = cycle.fetched,
            ingested = cycle.ingested,
            skipped = cycle.skipped,
            malformed = cycle.malformed,
            failed_writes = cycle.failed_writes,
            "Synchronization cycle finished"
        );

        Ok(cycle)
    }
}
