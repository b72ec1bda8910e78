//! Cognitive-services account endpoints: account listing and the per-hub
//! child project collection.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{read_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{ArmListResponse, CognitiveAccount, HubChildProject};
use foundry_config::constants::{ACCOUNTS_API_VERSION, HUB_PROJECTS_API_VERSION};

/// List every cognitive-services account in a subscription.
pub async fn list_accounts(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    subscription_id: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<CognitiveAccount>> {
    let url = format!(
        "{}/subscriptions/{}/providers/Microsoft.CognitiveServices/accounts",
        base_url, subscription_id
    );
    debug!(%url, "Listing cognitive-services accounts");

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&[("api-version", ACCOUNTS_API_VERSION)]);
    let response = send_request(
        builder,
        timeout,
        "/providers/Microsoft.CognitiveServices/accounts",
        "GET",
        metrics,
    )
    .await?;

    let resp: ArmListResponse<CognitiveAccount> = read_json(response, timeout).await?;
    Ok(resp.value)
}

/// List child projects nested under a hub's own resource id.
pub async fn list_hub_projects(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    hub_id: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<HubChildProject>> {
    let url = format!("{}{}/projects", base_url, hub_id);
    debug!(%url, "Listing hub child projects");

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&[("api-version", HUB_PROJECTS_API_VERSION)]);
    let response = send_request(
        builder,
        timeout,
        "/providers/Microsoft.CognitiveServices/accounts/projects",
        "GET",
        metrics,
    )
    .await?;

    let resp: ArmListResponse<HubChildProject> = read_json(response, timeout).await?;
    Ok(resp.value)
}
