//! Top-level graph queries.
//!
//! Responsibilities:
//! - Validate caller input; this is the only error class surfaced.
//! - Orchestrate [`ResourceAggregator`], [`AccessResolver`] and
//!   [`AgentGraphParser`] for the subscription, resource and agent queries.
//!
//! Does NOT handle:
//! - Request routing or response rendering (done by the caller).
//!
//! Invariants:
//! - Upstream calls run one at a time, in a fixed order.
//! - Upstream failures degrade to empty results; they never surface as errors.

use tracing::{debug, info, instrument};

use crate::access::AccessResolver;
use crate::agent_graph::AgentGraphParser;
use crate::aggregator::ResourceAggregator;
use crate::client::FoundryClient;
use crate::endpoints::agents_base_url;
use crate::error::{ClientError, Result};
use crate::fetch::Fetched;
use crate::models::{AgentNode, FoundryResources, RoleAssignment, Subscription, WorkspaceEndpointProbe};

/// Facade over the graph components, bound to one request-scoped client.
pub struct FoundryGraphService<'a> {
    client: &'a FoundryClient,
}

impl<'a> FoundryGraphService<'a> {
    pub fn new(client: &'a FoundryClient) -> Self {
        Self { client }
    }

    /// Subscriptions visible to the caller; empty on failure.
    #[instrument(skip(self))]
    pub async fn list_subscriptions(&self) -> Vec<Subscription> {
        Fetched::from_result(self.client.list_subscriptions().await)
            .into_logged_value("list_subscriptions", self.client.metrics())
    }

    /// Merged hubs and projects in a subscription.
    ///
    /// # Errors
    /// `InvalidRequest` if `subscription_id` is blank.
    #[instrument(skip(self))]
    pub async fn list_resources(&self, subscription_id: &str) -> Result<FoundryResources> {
        let subscription_id = required("subscription id", subscription_id)?;
        Ok(ResourceAggregator::new(self.client)
            .aggregate(subscription_id)
            .await)
    }

    /// Normalized agents of a project, in upstream list order.
    ///
    /// When `project_id` is given, every node carries the distinct-principal
    /// count of that project's role assignments and the project id.
    ///
    /// # Errors
    /// `InvalidRequest` if `project_endpoint` is blank, `InvalidUrl` if it is
    /// not an http(s) URL.
    #[instrument(skip(self))]
    pub async fn list_agents(
        &self,
        project_endpoint: &str,
        project_id: Option<&str>,
    ) -> Result<Vec<AgentNode>> {
        let project_endpoint = agents_base_url(project_endpoint)?;
        let project_id = project_id.map(str::trim).filter(|id| !id.is_empty());

        let access_count = match project_id {
            Some(id) => AccessResolver::new(self.client).resolve(id).await.access_count,
            None => 0,
        };

        let items = Fetched::from_result(self.client.list_agents(&project_endpoint).await)
            .into_logged_value("list_agents", self.client.metrics());

        let mut nodes = Vec::with_capacity(items.len());
        for item in items {
            let agent_id = item
                .get("id")
                .and_then(|id| id.as_str())
                .filter(|id| !id.is_empty());
            let raw = match agent_id {
                Some(agent_id) => match self.client.get_agent(&project_endpoint, agent_id).await {
                    Ok(detail) if detail.as_object().is_some_and(|o| !o.is_empty()) => detail,
                    Ok(_) => {
                        debug!(agent_id, "Agent detail empty, using list item");
                        item
                    }
                    Err(e) => {
                        debug!(agent_id, error = %e, "Agent detail unavailable, using list item");
                        item
                    }
                },
                None => item,
            };

            let mut node = AgentGraphParser::parse(&raw);
            node.access_count = access_count;
            node.project_id = project_id.map(str::to_string);
            nodes.push(node);
        }

        if let Some(m) = self.client.metrics() {
            m.record_agents_parsed(nodes.len());
        }
        info!(agents = nodes.len(), access_count, "Listed agents");

        Ok(nodes)
    }

    /// Raw role assignments on a resource; empty on failure.
    ///
    /// # Errors
    /// `InvalidRequest` if `resource_id` is blank.
    #[instrument(skip(self))]
    pub async fn role_assignments(&self, resource_id: &str) -> Result<Vec<RoleAssignment>> {
        let resource_id = required("resource id", resource_id)?;
        Ok(AccessResolver::new(self.client)
            .resolve(resource_id)
            .await
            .assignments)
    }

    /// Endpoint-like properties of every project workspace in a subscription.
    ///
    /// # Errors
    /// `InvalidRequest` if `subscription_id` is blank.
    #[instrument(skip(self))]
    pub async fn workspace_endpoint_probe(
        &self,
        subscription_id: &str,
    ) -> Result<Vec<WorkspaceEndpointProbe>> {
        let subscription_id = required("subscription id", subscription_id)?;
        Ok(ResourceAggregator::new(self.client)
            .probe_workspace_endpoints(subscription_id)
            .await)
    }
}

fn required<'v>(what: &str, value: &'v str) -> Result<&'v str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClientError::InvalidRequest(format!("{} is required", what)));
    }
    Ok(trimmed)
}
