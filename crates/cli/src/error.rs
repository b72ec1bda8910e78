//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` and `ConfigError` to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Graph queries degrade upstream failures to empty results, so most
//!   non-zero exits come from configuration or caller input.
//! - Exit code 130 is reserved for SIGINT (128 + SIGINT).

use foundry_client::ClientError;
use foundry_config::ConfigError;

/// Structured exit codes for foundry-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// No credential could be set up, or the upstream rejected it.
    AuthenticationFailed = 2,

    /// Network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Missing or malformed caller input or configuration.
    ///
    /// Scripts should fix the input and not retry.
    ValidationError = 5,

    /// SIGINT/Ctrl+C.
    Interrupted = 130,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::InvalidRequest(_) | ClientError::InvalidUrl(_) => ExitCode::ValidationError,
            err if err.is_auth_error() => ExitCode::AuthenticationFailed,
            ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::InvalidValue { .. }
            | ConfigError::InvalidTimeout { .. }
            | ConfigError::InvalidPageSize { .. } => ExitCode::ValidationError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Exit code of the first `ClientError` or `ConfigError` in the chain,
    /// else `GeneralError`.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::time::Duration;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::ConnectionError.as_i32(), 3);
        assert_eq!(ExitCode::ValidationError.as_i32(), 5);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_input_errors_are_validation() {
        let err = ClientError::InvalidRequest("project endpoint is required".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);

        let err = ClientError::InvalidUrl("ftp://x".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
    }

    #[test]
    fn test_auth_errors() {
        let err = ClientError::AuthFailed("credential is required".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationFailed);

        let err = ClientError::ApiError {
            status: 403,
            url: "https://management.azure.com/subscriptions".to_string(),
            message: "AuthorizationFailed".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationFailed);
    }

    #[test]
    fn test_timeout_is_connection_error() {
        let err = ClientError::Timeout(Duration::from_secs(10));
        assert_eq!(ExitCode::from(&err), ExitCode::ConnectionError);
    }

    #[test]
    fn test_other_api_errors_are_general() {
        let err = ClientError::ApiError {
            status: 500,
            url: "https://management.azure.com/subscriptions".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::GeneralError);
    }

    #[test]
    fn test_config_errors() {
        let err = ConfigError::InvalidPageSize {
            message: "must be between 1 and 100 (got 0)".to_string(),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&ConfigError::DotenvUnknown), ExitCode::GeneralError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err: anyhow::Error = Err::<(), _>(ClientError::InvalidRequest("x".to_string()))
            .context("Failed to list agents")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ValidationError);

        assert_eq!(anyhow::anyhow!("other").exit_code(), ExitCode::GeneralError);
    }
}
