use bridge_traits::error::BridgeError;
use core_store::ServiceKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("No feed source registered for service {service}")]
    SourceNotRegistered { service: ServiceKind },

    #[error("Upstream fetch failed: {0}")]
    Fetch(#[from] BridgeError),
}

pub type Result<T> = std::result::Result<T, SyncError>;

/// Why a single raw record could not be normalized.
///
/// Per-record failures never abort a cycle; the engine logs them and counts
/// them in the cycle report.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("Record is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Record has unparseable timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
}
