//! Demonstrates the logging bootstrap.
//!
//! Run with `cargo run -p core-runtime --example logging_demo`, optionally
//! with `RUST_LOG` set to override the configured filter.

use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};

fn main() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_filter("debug");

    init_logging(config).expect("Failed to initialize logging");

    tracing::debug!(component = "demo", "debug events pass the configured filter");
    tracing::info!(service = "soundcloud", ingested = 2, "synchronization cycle finished");
    tracing::warn!("this is what a degraded cycle looks like in the logs");
}
