//! Management-plane API methods for [`FoundryClient`].

use crate::auth::TokenAudience;
use crate::client::FoundryClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CognitiveAccount, HubChildProject, MlWorkspace, RoleAssignment, Subscription};

impl FoundryClient {
    /// List subscriptions visible to the caller.
    pub async fn list_subscriptions(&self) -> Result<Vec<Subscription>> {
        authed_call!(
            self,
            TokenAudience::Management,
            __token,
            endpoints::list_subscriptions(
                &self.http,
                &self.management_url,
                __token,
                self.lookup_timeout,
                self.metrics.as_ref(),
            )
            .await
        )
    }

    /// List cognitive-services accounts in a subscription.
    pub async fn list_accounts(&self, subscription_id: &str) -> Result<Vec<CognitiveAccount>> {
        authed_call!(
            self,
            TokenAudience::Management,
            __token,
            endpoints::list_accounts(
                &self.http,
                &self.management_url,
                __token,
                subscription_id,
                self.listing_timeout,
                self.metrics.as_ref(),
            )
            .await
        )
    }

    /// List ML workspaces in a subscription.
    pub async fn list_workspaces(&self, subscription_id: &str) -> Result<Vec<MlWorkspace>> {
        authed_call!(
            self,
            TokenAudience::Management,
            __token,
            endpoints::list_workspaces(
                &self.http,
                &self.management_url,
                __token,
                subscription_id,
                self.listing_timeout,
                self.metrics.as_ref(),
            )
            .await
        )
    }

    /// List the child projects of one hub.
    pub async fn list_hub_projects(&self, hub_id: &str) -> Result<Vec<HubChildProject>> {
        authed_call!(
            self,
            TokenAudience::Management,
            __token,
            endpoints::list_hub_projects(
                &self.http,
                &self.management_url,
                __token,
                hub_id,
                self.lookup_timeout,
                self.metrics.as_ref(),
            )
            .await
        )
    }

    /// List role assignments on a resource.
    pub async fn list_role_assignments(&self, resource_id: &str) -> Result<Vec<RoleAssignment>> {
        authed_call!(
            self,
            TokenAudience::Management,
            __token,
            endpoints::list_role_assignments(
                &self.http,
                &self.management_url,
                __token,
                resource_id,
                self.lookup_timeout,
                self.metrics.as_ref(),
            )
            .await
        )
    }
}
