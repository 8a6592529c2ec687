//! # SoundCloud Provider
//!
//! Implements the `FeedSource` trait for the SoundCloud tracks API.
//!
//! ## Overview
//!
//! - One GET per fetch against a user's tracks endpoint; whatever single
//!   page the API returns is the result, no pagination
//! - Per-element tolerance: a malformed track degrades to an empty raw
//!   record for the caller to count and skip, never failing the batch

pub mod connector;
pub mod error;
pub mod types;

pub use connector::SoundCloudConnector;
pub use error::{Result, SoundCloudError};
