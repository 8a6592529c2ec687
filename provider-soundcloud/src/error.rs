//! Error types for the SoundCloud provider

use bridge_traits::error::BridgeError;
use thiserror::Error;

/// SoundCloud provider errors
#[derive(Error, Debug)]
pub enum SoundCloudError {
    /// API request returned a non-success status
    #[error("SoundCloud API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// Failed to parse the top-level API response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Bridge error
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

/// Result type for SoundCloud operations
pub type Result<T> = std::result::Result<T, SoundCloudError>;

impl From<SoundCloudError> for BridgeError {
    fn from(error: SoundCloudError) -> Self {
        match error {
            SoundCloudError::ApiError {
                status_code,
                message,
            } => BridgeError::OperationFailed(format!(
                "SoundCloud API error (status {}): {}",
                status_code, message
            )),
            SoundCloudError::ParseError(msg) => {
                BridgeError::OperationFailed(format!("Parse error: {}", msg))
            }
            SoundCloudError::Bridge(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = SoundCloudError::ApiError {
            status_code: 403,
            message: "invalid client id".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "SoundCloud API error (status 403): invalid client id"
        );
    }

    #[test]
    fn test_error_conversion() {
        let error = SoundCloudError::ParseError("unexpected token".to_string());
        let bridge_error: BridgeError = error.into();

        assert!(matches!(bridge_error, BridgeError::OperationFailed(_)));
    }
}
