//! # YouTube Provider
//!
//! Implements the `FeedSource` trait for a YouTube uploads relay.
//!
//! ## Overview
//!
//! YouTube's own API exposes string video ids, which cannot serve as the
//! numeric remote item ids this system keys on. Deployments therefore run a
//! relay that republishes a channel's uploads as a JSON feed with numeric
//! ids and RFC 3339 timestamps; this connector consumes that relay. The
//! relay base URL is configuration, not a hardcoded host.

pub mod connector;
pub mod error;
pub mod types;

pub use connector::YouTubeConnector;
pub use error::{Result, YouTubeError};
