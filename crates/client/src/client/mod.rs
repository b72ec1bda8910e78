//! Request-scoped Foundry client context.
//!
//! [`FoundryClient`] bundles the HTTP client, management base URL, credential
//! strategy, per-call timeouts and metrics collector for one logical request.
//! It is built per request and passed explicitly into every component; there
//! is no process-wide instance.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `management`: Management-plane methods (subscriptions, accounts, workspaces, role assignments)
//! - `agents`: Data-plane agent methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Degrading failures to empty results (done by the aggregator, resolver and facade)
//!
//! # Invariants
//! - Every method acquires a fresh bearer token for its audience before the call
//! - Lookups use `lookup_timeout`; collection listings use `listing_timeout`

/// Acquire a token for `$audience`, bind it to `$token`, and evaluate `$call`.
macro_rules! authed_call {
    ($self:expr, $audience:expr, $token:ident, $call:expr) => {{
        let secret = $self.credential.bearer_token($audience).await?;
        let $token = ::secrecy::ExposeSecret::expose_secret(&secret);
        $call
    }};
}

pub mod builder;

mod agents;
mod management;

use std::time::Duration;

use crate::auth::Credential;
use crate::metrics::MetricsCollector;

/// Foundry API client context.
///
/// ```rust,ignore
/// use foundry_client::{Credential, FoundryClient};
///
/// let client = FoundryClient::builder()
///     .credential(Credential::AzureCli)
///     .build()?;
/// let subscriptions = client.list_subscriptions().await?;
/// ```
#[derive(Debug)]
pub struct FoundryClient {
    pub(crate) http: reqwest::Client,
    pub(crate) management_url: String,
    pub(crate) credential: Credential,
    pub(crate) lookup_timeout: Duration,
    pub(crate) listing_timeout: Duration,
    pub(crate) agent_page_size: usize,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl FoundryClient {
    /// Create a new client builder.
    pub fn builder() -> builder::FoundryClientBuilder {
        builder::FoundryClientBuilder::new()
    }

    /// Management-plane base URL, without a trailing slash.
    pub fn management_url(&self) -> &str {
        &self.management_url
    }

    pub fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    pub fn listing_timeout(&self) -> Duration {
        self.listing_timeout
    }

    pub fn agent_page_size(&self) -> usize {
        self.agent_page_size
    }

    pub fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use secrecy::SecretString;

    fn static_credential() -> Credential {
        Credential::Static {
            management: Some(SecretString::new("mgmt".to_string().into())),
            data_plane: None,
        }
    }

    #[test]
    fn test_builder_defaults() {
        let client = FoundryClient::builder()
            .credential(static_credential())
            .build()
            .unwrap();

        assert_eq!(client.management_url(), "https://management.azure.com");
        assert_eq!(client.lookup_timeout(), Duration::from_secs(10));
        assert_eq!(client.listing_timeout(), Duration::from_secs(30));
        assert_eq!(client.agent_page_size(), 100);
        assert!(client.metrics().is_none());
    }

    #[test]
    fn test_builder_normalizes_management_url() {
        let client = FoundryClient::builder()
            .management_url("http://127.0.0.1:9000//".to_string())
            .credential(static_credential())
            .build()
            .unwrap();

        assert_eq!(client.management_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_builder_requires_credential() {
        let err = FoundryClient::builder().build().unwrap_err();
        assert!(matches!(err, ClientError::AuthFailed(_)));
    }

    #[tokio::test]
    async fn test_missing_data_plane_token_fails_agent_listing() {
        let client = FoundryClient::builder()
            .credential(static_credential())
            .build()
            .unwrap();

        let err = client
            .list_agents("https://h.services.ai.azure.com/api/projects/p")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::CredentialUnavailable(_)));
    }
}
