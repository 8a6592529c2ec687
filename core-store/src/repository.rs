//! # Item Repository
//!
//! Persistence for synchronized feed items.
//!
//! ## Overview
//!
//! Three operations, matching what the sync engine and the published feed
//! need and nothing more:
//! - high-water mark lookup per service partition
//! - idempotent upsert keyed by item identity
//! - full partition listing, descending by publish time

use crate::{FeedItem, Result, ServiceKind, StoreError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

// ============================================================================
// Repository Trait
// ============================================================================

/// Repository trait for feed item persistence
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Latest publish time persisted in the service's partition.
    ///
    /// Computed with a descending `LIMIT 1` query, never a full scan. Ties on
    /// the maximal timestamp are not disambiguated; any item holding it is an
    /// acceptable representative. Returns `None` for an empty partition.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails. The store never
    /// retries internally; retry policy belongs to the caller.
    async fn latest_post_time(&self, service: ServiceKind) -> Result<Option<DateTime<Utc>>>;

    /// Write an item keyed by its identity key, replacing any prior record
    /// with the same key, so a retried write of the same remote item is a
    /// safe no-op in effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    async fn upsert(&self, item: &FeedItem) -> Result<()>;

    /// Full partition for display, descending by publish time
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    async fn list_for_service(&self, service: ServiceKind) -> Result<Vec<FeedItem>>;
}

// ============================================================================
// SQLite Implementation
// ============================================================================

/// SQLite implementation of [`ItemStore`]
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a feed item
#[derive(Debug, FromRow)]
struct ItemRow {
    service: String,
    remote_item_id: i64,
    post_time: i64,
    name: String,
    link: String,
}

impl TryFrom<ItemRow> for FeedItem {
    type Error = StoreError;

    fn try_from(row: ItemRow) -> Result<Self> {
        let service = ServiceKind::parse(&row.service)
            .ok_or_else(|| StoreError::CorruptRow(format!("unknown service: {}", row.service)))?;

        let post_time = DateTime::from_timestamp(row.post_time, 0).ok_or_else(|| {
            StoreError::CorruptRow(format!("post_time out of range: {}", row.post_time))
        })?;

        Ok(FeedItem {
            service,
            remote_item_id: row.remote_item_id,
            post_time,
            name: row.name,
            link: row.link,
        })
    }
}

#[async_trait]
impl ItemStore for SqliteItemStore {
    async fn latest_post_time(&self, service: ServiceKind) -> Result<Option<DateTime<Utc>>> {
        let latest = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT post_time
            FROM items
            WHERE partition_key = ?
            ORDER BY post_time DESC
            LIMIT 1
            "#,
        )
        .bind(service.partition_key())
        .fetch_optional(&self.pool)
        .await?;

        latest
            .map(|secs| {
                DateTime::from_timestamp(secs, 0).ok_or_else(|| {
                    StoreError::CorruptRow(format!("post_time out of range: {}", secs))
                })
            })
            .transpose()
    }

    async fn upsert(&self, item: &FeedItem) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO items (
                item_key, partition_key, service,
                remote_item_id, post_time, name, link
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(item_key) DO UPDATE SET
                post_time = excluded.post_time,
                name = excluded.name,
                link = excluded.link
            "#,
        )
        .bind(item.identity_key())
        .bind(item.partition_key())
        .bind(item.service.as_str())
        .bind(item.remote_item_id)
        .bind(item.post_time.timestamp())
        .bind(&item.name)
        .bind(&item.link)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_service(&self, service: ServiceKind) -> Result<Vec<FeedItem>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT service, remote_item_id, post_time, name, link
            FROM items
            WHERE partition_key = ?
            ORDER BY post_time DESC
            "#,
        )
        .bind(service.partition_key())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(FeedItem::try_from)
            .collect::<Result<Vec<_>>>()
    }
}

// ============================================================================
// Tests
// ============================================================================
