//! Client builder for constructing [`FoundryClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (credential)
//! - Normalizing the management base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client
//!
//! # What this module does NOT handle:
//! - Actual API calls (see the `management` and `agents` submodules)
//! - Token acquisition (handled by [`Credential`])
//!
//! # Invariants
//! - A credential must be provided before calling `build()`
//! - Timeouts are applied per request, not on the shared HTTP client

use std::time::Duration;

use crate::auth::Credential;
use crate::client::FoundryClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use foundry_config::Config;
use foundry_config::constants::{
    DEFAULT_AGENT_PAGE_SIZE, DEFAULT_LISTING_TIMEOUT_SECS, DEFAULT_LOOKUP_TIMEOUT_SECS,
    DEFAULT_MANAGEMENT_URL,
};

/// Maximum redirects followed by the HTTP client.
const MAX_REDIRECTS: usize = 5;

/// Builder for creating a new [`FoundryClient`].
pub struct FoundryClientBuilder {
    management_url: String,
    credential: Option<Credential>,
    lookup_timeout: Duration,
    listing_timeout: Duration,
    agent_page_size: usize,
    metrics: Option<MetricsCollector>,
}

impl Default for FoundryClientBuilder {
    fn default() -> Self {
        Self {
            management_url: DEFAULT_MANAGEMENT_URL.to_string(),
            credential: None,
            lookup_timeout: Duration::from_secs(DEFAULT_LOOKUP_TIMEOUT_SECS),
            listing_timeout: Duration::from_secs(DEFAULT_LISTING_TIMEOUT_SECS),
            agent_page_size: DEFAULT_AGENT_PAGE_SIZE,
            metrics: None,
        }
    }
}

impl FoundryClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the management-plane base URL. Trailing slashes are removed.
    pub fn management_url(mut self, url: String) -> Self {
        self.management_url = url;
        self
    }

    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Timeout for lightweight lookups (default 10 seconds).
    pub fn lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Timeout for collection listings (default 30 seconds).
    pub fn listing_timeout(mut self, timeout: Duration) -> Self {
        self.listing_timeout = timeout;
        self
    }

    pub fn agent_page_size(mut self, size: usize) -> Self {
        self.agent_page_size = size;
        self
    }

    /// Set the metrics collector for upstream call tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Pre-configure the builder from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.management_url = config.connection.management_url.clone();
        self.credential = Some(Credential::from(&config.auth.strategy));
        self.lookup_timeout = config.connection.lookup_timeout;
        self.listing_timeout = config.connection.listing_timeout;
        self.agent_page_size = config.defaults.agent_page_size;
        self
    }

    /// Build the [`FoundryClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if no credential was provided.
    /// Returns [`ClientError::InvalidUrl`] if the management URL is blank.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<FoundryClient> {
        let credential = self
            .credential
            .ok_or_else(|| ClientError::AuthFailed("credential is required".to_string()))?;

        let management_url = self.management_url.trim().trim_end_matches('/').to_string();
        if management_url.is_empty() {
            return Err(ClientError::InvalidUrl(
                "management_url is required".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(concat!("foundry-graph/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(FoundryClient {
            http,
            management_url,
            credential,
            lookup_timeout: self.lookup_timeout,
            listing_timeout: self.listing_timeout,
            agent_page_size: self.agent_page_size,
            metrics: self.metrics,
        })
    }
}
