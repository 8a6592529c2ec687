//! Upstream Feed Source Abstraction
//!
//! Defines the contract between the sync engine and a provider connector:
//! one invocation, one network call, one page of raw records.

use async_trait::async_trait;

use crate::error::Result;

/// A single upstream record before normalization.
///
/// Fields arrive exactly as the provider exposed them; anything the provider
/// omitted or mangled is `None`. The sync engine decides per record whether
/// the bag can be normalized into a canonical item or must be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Provider-assigned numeric item id, unique within the service
    pub remote_id: Option<i64>,
    /// Display title
    pub title: Option<String>,
    /// Canonical URL to the item
    pub permalink_url: Option<String>,
    /// Publish time string in the provider's own timestamp format
    pub created_at: Option<String>,
}

/// Upstream feed capability.
///
/// `fetch_current` performs exactly one network call and returns whatever
/// single page the upstream exposes. There is no pagination loop; items
/// beyond the first page are invisible to callers, which is an accepted
/// property of the design rather than something connectors should work
/// around.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the provider's current item page.
    ///
    /// Individual records that fail to map are returned as partially-empty
    /// [`RawRecord`]s rather than dropped, so the caller can count them.
    ///
    /// # Errors
    ///
    /// Returns an error if the network call fails, the upstream answers with
    /// a non-success status, or the top-level body cannot be parsed.
    async fn fetch_current(&self) -> Result<Vec<RawRecord>>;
}
