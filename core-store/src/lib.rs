//! # Feed Store Module
//!
//! Owns the canonical feed database and the repository used to read and
//! write it.
//!
//! ## Overview
//!
//! This module manages:
//! - The canonical item model and its partition/identity key scheme
//! - SQLite schema and migrations
//! - The [`ItemStore`] repository: high-water mark lookup, idempotent
//!   upsert keyed by item identity, ordered partition listing

pub mod db;
pub mod error;
pub mod models;
pub mod repository;

pub use db::{create_pool, create_test_pool, DatabaseConfig};
pub use error::{Result, StoreError};
pub use models::{FeedItem, ServiceKind};
pub use repository::{ItemStore, SqliteItemStore};
