//! Data-plane agent methods for [`FoundryClient`].

use serde_json::Value;

use crate::auth::TokenAudience;
use crate::client::FoundryClient;
use crate::endpoints;
use crate::error::Result;

impl FoundryClient {
    /// List raw agents in a project, capped at the configured page size.
    pub async fn list_agents(&self, project_endpoint: &str) -> Result<Vec<Value>> {
        authed_call!(
            self,
            TokenAudience::DataPlane,
            __token,
            endpoints::list_agents(
                &self.http,
                project_endpoint,
                __token,
                self.agent_page_size,
                self.listing_timeout,
                self.metrics.as_ref(),
            )
            .await
        )
    }

    /// Fetch one agent's detail payload.
    pub async fn get_agent(&self, project_endpoint: &str, agent_id: &str) -> Result<Value> {
        authed_call!(
            self,
            TokenAudience::DataPlane,
            __token,
            endpoints::get_agent(
                &self.http,
                project_endpoint,
                __token,
                agent_id,
                self.lookup_timeout,
                self.metrics.as_ref(),
            )
            .await
        )
    }
}
