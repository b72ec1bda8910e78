//! Data-plane agent endpoints (listing and detail).

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::endpoints::{encode_path_segment, read_json, send_request};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::AgentListResponse;
use foundry_config::constants::AGENTS_API_VERSION;

/// Validate a project endpoint and return it without trailing slashes.
///
/// # Errors
/// `InvalidRequest` when empty, `InvalidUrl` when not an absolute http(s) URL.
pub fn agents_base_url(project_endpoint: &str) -> Result<String> {
    let trimmed = project_endpoint.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ClientError::InvalidRequest(
            "project endpoint is required".to_string(),
        ));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid project endpoint: {}", e)))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ClientError::InvalidUrl(format!(
            "project endpoint must be an http(s) URL with a host: {}",
            trimmed
        )));
    }

    Ok(trimmed.to_string())
}

/// List raw agents for a project, capped at `limit` items.
pub async fn list_agents(
    client: &Client,
    project_endpoint: &str,
    auth_token: &str,
    limit: usize,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Value>> {
    let url = format!("{}/agents", agents_base_url(project_endpoint)?);
    debug!(%url, limit, "Listing agents");

    let limit = limit.to_string();
    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&[("api-version", AGENTS_API_VERSION), ("limit", limit.as_str())]);
    let response = send_request(builder, timeout, "/agents", "GET", metrics).await?;

    let resp: AgentListResponse = read_json(response, timeout).await?;
    Ok(resp.into_items())
}

/// Fetch one agent's detailed payload.
pub async fn get_agent(
    client: &Client,
    project_endpoint: &str,
    auth_token: &str,
    agent_id: &str,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> Result<Value> {
    let url = format!(
        "{}/agents/{}",
        agents_base_url(project_endpoint)?,
        encode_path_segment(agent_id)
    );
    debug!(%url, "Fetching agent detail");

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&[("api-version", AGENTS_API_VERSION)]);
    let response = send_request(builder, timeout, "/agents/{id}", "GET", metrics).await?;

    read_json(response, timeout).await
}
