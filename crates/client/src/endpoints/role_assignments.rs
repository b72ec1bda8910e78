//! Role-assignment listing for an arbitrary resource path.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{read_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{ArmListResponse, RoleAssignment};
use foundry_config::constants::ROLE_ASSIGNMENTS_API_VERSION;

/// Ensure a resource id starts with exactly one `/`.
pub fn normalize_resource_id(resource_id: &str) -> String {
    format!("/{}", resource_id.trim().trim_start_matches('/'))
}

/// List role assignments scoped to a resource.
pub async fn list_role_assignments(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    resource_id: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<RoleAssignment>> {
    let url = format!(
        "{}{}/providers/Microsoft.Authorization/roleAssignments",
        base_url,
        normalize_resource_id(resource_id)
    );
    debug!(%url, "Listing role assignments");

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&[("api-version", ROLE_ASSIGNMENTS_API_VERSION)]);
    let response = send_request(
        builder,
        timeout,
        "/providers/Microsoft.Authorization/roleAssignments",
        "GET",
        metrics,
    )
    .await?;

    let resp: ArmListResponse<RoleAssignment> = read_json(response, timeout).await?;
    Ok(resp.value)
}
