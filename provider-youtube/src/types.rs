//! YouTube relay response types

use bridge_traits::feed::RawRecord;
use serde::Deserialize;

/// Relay uploads envelope
#[derive(Debug, Deserialize)]
pub struct UploadsResponse {
    /// Upload elements; left as raw values so one bad element cannot fail
    /// the envelope
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

/// One relayed upload, reduced to the fields the feed consumes.
///
/// Every field is optional, matching the tolerance of the other connectors.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResource {
    /// Numeric upload id assigned by the relay
    #[serde(default)]
    pub id: Option<i64>,

    /// Video title
    #[serde(default)]
    pub title: Option<String>,

    /// Canonical watch URL
    #[serde(default)]
    pub permalink_url: Option<String>,

    /// Publish time, RFC 3339
    #[serde(default)]
    pub created_at: Option<String>,
}

impl From<UploadResource> for RawRecord {
    fn from(upload: UploadResource) -> Self {
        RawRecord {
            remote_id: upload.id,
            title: upload.title,
            permalink_url: upload.permalink_url,
            created_at: upload.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_uploads_envelope() {
        let json = r#"{
            "items": [
                {
                    "id": 9,
                    "title": "Live Set",
                    "permalink_url": "https://www.youtube.com/watch?v=abc",
                    "created_at": "2024-01-02T00:00:00Z"
                }
            ]
        }"#;

        let envelope: UploadsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.items.len(), 1);

        let upload: UploadResource = serde_json::from_value(envelope.items[0].clone()).unwrap();
        assert_eq!(upload.id, Some(9));
        assert_eq!(upload.created_at.as_deref(), Some("2024-01-02T00:00:00Z"));
    }

    #[test]
    fn test_missing_items_defaults_to_empty() {
        let envelope: UploadsResponse = serde_json::from_str("{}").unwrap();
        assert!(envelope.items.is_empty());
    }
}
