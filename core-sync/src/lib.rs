//! # Sync Engine Module
//!
//! Orchestrates synchronization of upstream feed pages into the item store.
//!
//! ## Overview
//!
//! One cycle per service: read the partition's high-water mark, fetch the
//! provider's current page, normalize each raw record, keep what is strictly
//! newer than the mark, and upsert the survivors one by one. The engine
//! holds no state between cycles; every cycle is a function of the current
//! store contents and the current upstream page.
//!
//! ## Components
//!
//! - **Normalization** (`normalize`): per-record mapping into the canonical
//!   item shape, with provider-specific timestamp formats
//! - **Sync Engine** (`engine`): the cycle orchestrator and its
//!   [`SyncCycle`] report

pub mod engine;
pub mod error;
pub mod normalize;

pub use engine::{SyncCycle, SyncEngine};
pub use error::{RecordError, Result, SyncError};
pub use normalize::normalize;
