//! Error types for the Foundry client.
//!
//! Only caller-input errors ([`ClientError::InvalidRequest`]) are surfaced by
//! the [`crate::FoundryGraphService`] queries. Everything else is raised by the
//! low-level endpoint functions and downgraded to an empty result (see
//! [`crate::Fetched`]) by the component that issued the call.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Foundry client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Client construction or authentication configuration is invalid.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// No bearer token could be obtained for the requested audience.
    #[error("Credential unavailable: {0}")]
    CredentialUnavailable(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from an upstream API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Upstream body could not be decoded.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Caller supplied a missing or malformed parameter.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Check if this error indicates an authentication or credential failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_)
                | Self::CredentialUnavailable(_)
                | Self::ApiError {
                    status: 401 | 403,
                    ..
                }
        )
    }

    /// Check if this error was caused by caller input rather than upstream state.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_) | Self::InvalidUrl(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_auth_error() {
        assert!(ClientError::AuthFailed("test".to_string()).is_auth_error());
        assert!(ClientError::CredentialUnavailable("az missing".to_string()).is_auth_error());
        assert!(
            ClientError::ApiError {
                status: 403,
                url: "https://management.azure.com/subscriptions".to_string(),
                message: "forbidden".to_string(),
            }
            .is_auth_error()
        );
        assert!(!ClientError::Timeout(Duration::from_secs(1)).is_auth_error());
    }

    #[test]
    fn test_error_is_input_error() {
        assert!(ClientError::InvalidRequest("missing endpoint".to_string()).is_input_error());
        assert!(
            !ClientError::ApiError {
                status: 400,
                url: "https://example.com".to_string(),
                message: "bad".to_string(),
            }
            .is_input_error()
        );
    }

    #[test]
    fn test_api_error_display_includes_status_and_url() {
        let err = ClientError::ApiError {
            status: 404,
            url: "https://management.azure.com/x".to_string(),
            message: "ResourceNotFound".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("404"));
        assert!(display.contains("https://management.azure.com/x"));
        assert!(display.contains("ResourceNotFound"));
    }
}
