//! Connection configuration types.
//!
//! Responsibilities:
//! - Define the management-plane connection settings and per-call timeouts.
//! - Define query defaults (project endpoint, agent page size).
//! - Combine them with auth into the top-level `Config`.
//!
//! Invariants:
//! - Default values come from `constants`, not magic numbers.
//! - `management_url` never carries a trailing slash.

use std::time::Duration;

use crate::constants::{
    DEFAULT_AGENT_PAGE_SIZE, DEFAULT_LISTING_TIMEOUT_SECS, DEFAULT_LOOKUP_TIMEOUT_SECS,
    DEFAULT_MANAGEMENT_URL,
};
use crate::types::auth::AuthConfig;

/// Connection settings for the management plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Management-plane base URL (e.g. https://management.azure.com)
    pub management_url: String,
    /// Timeout for lightweight lookups
    pub lookup_timeout: Duration,
    /// Timeout for listing calls
    pub listing_timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            management_url: DEFAULT_MANAGEMENT_URL.to_string(),
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
            listing_timeout: Duration::from_secs(DEFAULT_LISTING_TIMEOUT_SECS),
        }
    }
}

/// Defaults applied to queries when the caller gives no explicit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    /// Project endpoint used by the agents query (`PROJECT_ENDPOINT`)
    pub project_endpoint: Option<String>,
    /// Page size requested from the agent listing endpoint
    pub agent_page_size: usize,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            project_endpoint: None,
            agent_page_size: DEFAULT_AGENT_PAGE_SIZE,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
    pub defaults: QueryDefaults,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AuthStrategy;

    #[test]
    fn test_default_config_targets_public_management_plane() {
        let config = Config::default();
        assert_eq!(
            config.connection.management_url,
            "https://management.azure.com"
        );
        assert_eq!(config.connection.lookup_timeout, Duration::from_secs(10));
        assert_eq!(config.connection.listing_timeout, Duration::from_secs(30));
        assert_eq!(config.defaults.agent_page_size, 100);
        assert!(config.defaults.project_endpoint.is_none());
        assert!(matches!(config.auth.strategy, AuthStrategy::AzureCli));
    }
}
