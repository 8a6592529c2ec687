//! # Host Bridge Traits
//!
//! Capability seams between the feed core and its environment.
//!
//! ## Overview
//!
//! The core never talks to the network directly. Outbound requests go
//! through the [`HttpClient`](http::HttpClient) seam, and each upstream
//! service is reached through a [`FeedSource`](feed::FeedSource)
//! implementation built on top of it. Tests substitute either seam with a
//! mock; production wiring installs the reqwest-backed client from
//! `bridge-native`.
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). Implementations
//! should convert transport-specific errors into it and keep the message
//! actionable (status codes, URLs).
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so implementations can be shared
//! across async tasks behind `Arc`.

pub mod error;
pub mod feed;
pub mod http;

pub use error::BridgeError;
pub use feed::{FeedSource, RawRecord};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, RetryPolicy};
