//! SoundCloud API response types

use bridge_traits::feed::RawRecord;
use serde::Deserialize;

/// SoundCloud track resource, reduced to the fields the feed consumes.
///
/// Every field is optional: a track that omits or mangles one still maps to
/// a raw record, and the sync engine decides whether that record is usable.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackResource {
    /// Track id, unique per service
    #[serde(default)]
    pub id: Option<i64>,

    /// Track title
    #[serde(default)]
    pub title: Option<String>,

    /// Canonical track URL
    #[serde(default)]
    pub permalink_url: Option<String>,

    /// Publish time, `YYYY/MM/DD HH:MM:SS +0000`
    #[serde(default)]
    pub created_at: Option<String>,
}

impl From<TrackResource> for RawRecord {
    fn from(track: TrackResource) -> Self {
        RawRecord {
            remote_id: track.id,
            title: track.title,
            permalink_url: track.permalink_url,
            created_at: track.created_at,
        }
    }
}
