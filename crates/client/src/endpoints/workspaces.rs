//! Machine-learning workspace listing.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{read_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{ArmListResponse, MlWorkspace};
use foundry_config::constants::WORKSPACES_API_VERSION;

/// List every ML workspace in a subscription (hubs and projects alike).
pub async fn list_workspaces(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    subscription_id: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<MlWorkspace>> {
    let url = format!(
        "{}/subscriptions/{}/providers/Microsoft.MachineLearningServices/workspaces",
        base_url, subscription_id
    );
    debug!(%url, "Listing ML workspaces");

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&[("api-version", WORKSPACES_API_VERSION)]);
    let response = send_request(
        builder,
        timeout,
        "/providers/Microsoft.MachineLearningServices/workspaces",
        "GET",
        metrics,
    )
    .await?;

    let resp: ArmListResponse<MlWorkspace> = read_json(response, timeout).await?;
    Ok(resp.value)
}
