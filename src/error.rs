//! User-facing error taxonomy.
//!
//! Every failure the client can hit maps onto one of these kinds so the UI
//! can surface it instead of dropping it on the floor.

use crate::api::error::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server domain could not be read at startup.
    #[error("failed to load server configuration: {reason}")]
    ConfigLoadFailure { reason: String },

    /// The request never produced a usable response (connect, timeout,
    /// transport, or a body that was not valid JSON).
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The backend answered with a non-success status.
    #[error("backend error (status {status}): {message}")]
    BackendError { status: u16, message: String },

    /// The system clipboard refused the write.
    #[error("clipboard denied: {0}")]
    ClipboardDenied(String),
}

impl From<ApiError> for ClientError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http { status, message } => ClientError::BackendError { status, message },
            ApiError::Reqwest(e) => ClientError::NetworkFailure(e.to_string()),
            ApiError::Decode(e) => ClientError::NetworkFailure(format!("malformed response: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_maps_to_backend_error() {
        let api_err = ApiError::Http {
            status: 500,
            message: "Internal server error".to_string(),
        };
        match ClientError::from(api_err) {
            ClientError::BackendError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal server error");
            }
            other => panic!("unexpected mapping: {:?}", other),
        }
    }

    #[test]
    fn test_decode_error_maps_to_network_failure() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let mapped = ClientError::from(ApiError::Decode(json_err));
        assert!(matches!(mapped, ClientError::NetworkFailure(_)));
    }
}
