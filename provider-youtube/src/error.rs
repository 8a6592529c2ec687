//! Error types for the YouTube provider

use bridge_traits::error::BridgeError;
use thiserror::Error;

/// YouTube provider errors
#[derive(Error, Debug)]
pub enum YouTubeError {
    /// Relay request returned a non-success status
    #[error("YouTube relay error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// Failed to parse the top-level relay response
    #[error("Failed to parse relay response: {0}")]
    ParseError(String),

    /// Bridge error
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// Result type for YouTube operations
pub type Result<T> = std::result::Result<T, YouTubeError>;

impl From<YouTubeError> for BridgeError {
    fn from(error: YouTubeError) -> Self {
        match error {
            YouTubeError::ApiError {
                status_code,
                message,
            } => BridgeError::OperationFailed(format!(
                "YouTube relay error (status {}): {}",
                status_code, message
            )),
            YouTubeError::ParseError(msg) => {
                BridgeError::OperationFailed(format!("Parse error: {}", msg))
            }
            YouTubeError::Bridge(e) => e,
        }
    }
}
