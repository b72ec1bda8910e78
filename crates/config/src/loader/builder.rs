//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from `.env`, environment variables, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` override environment values.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - Any static token selects `AuthStrategy::StaticTokens`; otherwise the Azure CLI is used.

use secrecy::SecretString;
use std::time::Duration;
use tracing::debug;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_AGENT_PAGE_SIZE, DEFAULT_LISTING_TIMEOUT_SECS, DEFAULT_LOOKUP_TIMEOUT_SECS,
    DEFAULT_MANAGEMENT_URL, MAX_AGENT_PAGE_SIZE, MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig, QueryDefaults};

/// Configuration loader that builds config from `.env` and environment variables.
#[derive(Default)]
pub struct ConfigLoader {
    management_url: Option<String>,
    management_token: Option<SecretString>,
    data_plane_token: Option<SecretString>,
    lookup_timeout: Option<Duration>,
    listing_timeout: Option<Duration>,
    agent_page_size: Option<usize>,
    project_endpoint: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            debug!("DOTENV_DISABLED set, skipping .env");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the management-plane base URL.
    pub fn with_management_url(mut self, url: String) -> Self {
        self.management_url = Some(url);
        self
    }

    /// Set a pre-acquired management-plane token.
    pub fn with_management_token(mut self, token: String) -> Self {
        self.management_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set a pre-acquired data-plane token.
    pub fn with_data_plane_token(mut self, token: String) -> Self {
        self.data_plane_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the lookup timeout.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }

    /// Set the listing timeout.
    pub fn with_listing_timeout(mut self, timeout: Duration) -> Self {
        self.listing_timeout = Some(timeout);
        self
    }

    /// Set the agent listing page size.
    pub fn with_agent_page_size(mut self, size: usize) -> Self {
        self.agent_page_size = Some(size);
        self
    }

    /// Set the default project endpoint for the agents query.
    pub fn with_project_endpoint(mut self, endpoint: String) -> Self {
        self.project_endpoint = Some(endpoint);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let management_url = validate_and_normalize_url(
            "management_url",
            self.management_url
                .as_deref()
                .unwrap_or(DEFAULT_MANAGEMENT_URL),
        )?;

        let connection = ConnectionConfig {
            management_url,
            lookup_timeout: self
                .lookup_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS)),
            listing_timeout: self
                .listing_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_LISTING_TIMEOUT_SECS)),
        };
        validate_timeout("lookup_timeout", connection.lookup_timeout)?;
        validate_timeout("listing_timeout", connection.listing_timeout)?;

        let agent_page_size = self.agent_page_size.unwrap_or(DEFAULT_AGENT_PAGE_SIZE);
        if agent_page_size == 0 || agent_page_size > MAX_AGENT_PAGE_SIZE {
            return Err(ConfigError::InvalidPageSize {
                message: format!(
                    "must be between 1 and {} (got {})",
                    MAX_AGENT_PAGE_SIZE, agent_page_size
                ),
            });
        }

        let strategy = if self.management_token.is_some() || self.data_plane_token.is_some() {
            AuthStrategy::StaticTokens {
                management: self.management_token,
                data_plane: self.data_plane_token,
            }
        } else {
            AuthStrategy::AzureCli
        };

        Ok(Config {
            connection,
            auth: AuthConfig { strategy },
            defaults: QueryDefaults {
                project_endpoint: self.project_endpoint,
                agent_page_size,
            },
        })
    }

    pub(crate) fn set_management_url(&mut self, url: Option<String>) {
        self.management_url = url;
    }

    pub(crate) fn set_management_token(&mut self, token: Option<SecretString>) {
        self.management_token = token;
    }

    pub(crate) fn set_data_plane_token(&mut self, token: Option<SecretString>) {
        self.data_plane_token = token;
    }

    pub(crate) fn set_lookup_timeout(&mut self, timeout: Option<Duration>) {
        self.lookup_timeout = timeout;
    }

    pub(crate) fn set_listing_timeout(&mut self, timeout: Option<Duration>) {
        self.listing_timeout = timeout;
    }

    pub(crate) fn set_agent_page_size(&mut self, size: Option<usize>) {
        self.agent_page_size = size;
    }

    pub(crate) fn set_project_endpoint(&mut self, endpoint: Option<String>) {
        self.project_endpoint = endpoint;
    }
}

fn validate_timeout(var: &str, timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            var: var.to_string(),
            message: "must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            var: var.to_string(),
            message: format!(
                "exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Parse as an absolute URL with scheme http or https and a host
/// - Normalize by stripping trailing slash
fn validate_and_normalize_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: var.into(),
        message: format!("must be an absolute http(s) URL with a host: {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: var.into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: var.into(),
            message: "host is required".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
