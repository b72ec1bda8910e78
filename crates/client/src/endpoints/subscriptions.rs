//! Subscription listing.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{read_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{ArmListResponse, Subscription};
use foundry_config::constants::SUBSCRIPTIONS_API_VERSION;

/// List the subscriptions visible to the management token.
pub async fn list_subscriptions(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Subscription>> {
    let url = format!("{}/subscriptions", base_url);
    debug!(%url, "Listing subscriptions");

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&[("api-version", SUBSCRIPTIONS_API_VERSION)]);
    let response = send_request(builder, timeout, "/subscriptions", "GET", metrics).await?;

    let resp: ArmListResponse<Subscription> = read_json(response, timeout).await?;
    Ok(resp.value)
}
