//! # Core Runtime Module
//!
//! Foundational runtime infrastructure for the feed core:
//! - Logging and tracing bootstrap
//! - Typed configuration with validation
//!
//! ## Overview
//!
//! Crates in this workspace emit through the `tracing` macros directly; this
//! crate owns subscriber installation and the configuration types the
//! service bootstrap consumes. Nothing here reads the process environment
//! except the standard `RUST_LOG` handling inside `tracing-subscriber`.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{CoreConfig, SoundCloudConfig, YouTubeConfig};
pub use error::{Error, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
