//! Canonical feed model shared by the store, the sync engine, and the
//! published feed document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream services whose feeds are synchronized.
///
/// A closed set: adding a provider means adding a variant here plus a
/// connector crate and a timestamp mapping in the sync engine. Nothing else
/// switches on service literals.
///
/// # Examples
///
/// ```
/// use core_store::ServiceKind;
///
/// let service = ServiceKind::SoundCloud;
/// assert_eq!(service.partition_key(), "Service 0");
/// assert_eq!(service.as_str(), "soundcloud");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// SoundCloud track feed
    SoundCloud,
    /// YouTube uploads feed
    YouTube,
}

impl ServiceKind {
    /// Stable integer code, part of the persisted key scheme
    pub fn code(&self) -> i64 {
        match self {
            ServiceKind::SoundCloud => 0,
            ServiceKind::YouTube => 1,
        }
    }

    /// Partition identifier scoping every storage operation for this service
    pub fn partition_key(&self) -> String {
        format!("Service {}", self.code())
    }

    /// Provider identifier string used in logs and persisted rows
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::SoundCloud => "soundcloud",
            ServiceKind::YouTube => "youtube",
        }
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceKind::SoundCloud => "SoundCloud",
            ServiceKind::YouTube => "YouTube",
        }
    }

    /// Parse a provider identifier string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "soundcloud" => Some(ServiceKind::SoundCloud),
            "youtube" => Some(ServiceKind::YouTube),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synchronized feed item.
///
/// Created once when the sync engine first observes the remote item, never
/// mutated or deleted afterwards. `(service, remote_item_id)` is the global
/// identity; `post_time` orders the published feed and drives the dedupe
/// cursor.
///
/// Serialization uses the stable published field names: `service`,
/// `remoteItemId`, `postTime`, `name`, `link`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub service: ServiceKind,
    /// Provider-assigned id, unique within the service
    pub remote_item_id: i64,
    /// Upstream publish time
    pub post_time: DateTime<Utc>,
    /// Display title
    pub name: String,
    /// Canonical URL to the item
    pub link: String,
}

impl FeedItem {
    /// Identity key within the service partition: `"<code>:<remote id>"`
    pub fn identity_key(&self) -> String {
        format!("{}:{}", self.service.code(), self.remote_item_id)
    }

    /// Partition the item belongs to
    pub fn partition_key(&self) -> String {
        self.service.partition_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item() -> FeedItem {
        FeedItem {
            service: ServiceKind::SoundCloud,
            remote_item_id: 42,
            post_time: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
            name: "Track".to_string(),
            link: "https://soundcloud.example/track".to_string(),
        }
    }

    #[test]
    fn test_partition_key_scheme() {
        assert_eq!(ServiceKind::SoundCloud.partition_key(), "Service 0");
        assert_eq!(ServiceKind::YouTube.partition_key(), "Service 1");
    }

    #[test]
    fn test_identity_key_scheme() {
        assert_eq!(item().identity_key(), "0:42");
    }

    #[test]
    fn test_service_parse_roundtrip() {
        for service in [ServiceKind::SoundCloud, ServiceKind::YouTube] {
            assert_eq!(ServiceKind::parse(service.as_str()), Some(service));
        }
        assert_eq!(ServiceKind::parse("vimeo"), None);
    }

    #[test]
    fn test_serialized_field_names_are_stable() {
        let value = serde_json::to_value(item()).unwrap();
        let object = value.as_object().unwrap();

        for field in ["service", "remoteItemId", "postTime", "name", "link"] {
            assert!(object.contains_key(field), "missing field {}", field);
        }
        assert_eq!(object["service"], "soundcloud");
        assert_eq!(object["remoteItemId"], 42);
    }

    #[test]
    fn test_deserialize_published_shape() {
        let json = r#"{
            "service": "youtube",
            "remoteItemId": 7,
            "postTime": "2024-01-02T00:00:00Z",
            "name": "Upload",
            "link": "https://youtube.example/watch?v=7"
        }"#;

        let item: FeedItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.service, ServiceKind::YouTube);
        assert_eq!(item.identity_key(), "1:7");
    }
}
