//! Record normalization
//!
//! Maps a provider's raw field bag into the canonical item shape. Each
//! service declares its publish-time format here; this mapping plus a
//! `ServiceKind` variant and a connector crate is all a new provider needs.

use crate::error::RecordError;
use bridge_traits::feed::RawRecord;
use chrono::{DateTime, Utc};
use core_store::{FeedItem, ServiceKind};

/// Publish-time layout of the SoundCloud tracks API
const SOUNDCLOUD_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S %z";

/// Normalize one raw record into a canonical item.
///
/// # Errors
///
/// Returns a [`RecordError`] naming the missing field or the unparseable
/// timestamp. Callers skip the record and keep the batch going.
pub fn normalize(service: ServiceKind, record: &RawRecord) -> Result<FeedItem, RecordError> {
    let remote_item_id = record
        .remote_id
        .ok_or(RecordError::MissingField { field: "id" })?;
    let name = record
        .title
        .clone()
        .ok_or(RecordError::MissingField { field: "title" })?;
    let link = record
        .permalink_url
        .clone()
        .ok_or(RecordError::MissingField {
            field: "permalink_url",
        })?;
    let created_at = record.created_at.as_deref().ok_or(RecordError::MissingField {
        field: "created_at",
    })?;

    let post_time = parse_post_time(service, created_at)?;

    Ok(FeedItem {
        service,
        remote_item_id,
        post_time,
        name,
        link,
    })
}

/// Parse a publish time in the service's known format
fn parse_post_time(service: ServiceKind, value: &str) -> Result<DateTime<Utc>, RecordError> {
    let parsed = match service {
        ServiceKind::SoundCloud => DateTime::parse_from_str(value, SOUNDCLOUD_TIME_FORMAT),
        ServiceKind::YouTube => DateTime::parse_from_rfc3339(value),
    };

    parsed
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RecordError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
