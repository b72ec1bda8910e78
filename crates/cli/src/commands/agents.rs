//! Agents command implementation.

use anyhow::{Context, Result};
use foundry_client::{ClientError, FoundryGraphService};
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::formatters::Formatter;

/// Pick the explicit endpoint, else the configured default.
pub fn resolve_project_endpoint(
    flag: Option<String>,
    configured: Option<String>,
) -> Result<String, ClientError> {
    flag.filter(|e| !e.trim().is_empty())
        .or(configured)
        .ok_or_else(|| {
            ClientError::InvalidRequest(
                "project endpoint is required (pass --project-endpoint or set PROJECT_ENDPOINT)"
                    .to_string(),
            )
        })
}

pub async fn run(
    service: &FoundryGraphService<'_>,
    project_endpoint: &str,
    project_id: Option<&str>,
    formatter: &dyn Formatter,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(project_endpoint, project_id, "Listing agents");

    let agents = cancel
        .run(service.list_agents(project_endpoint, project_id))
        .await?
        .context("Failed to list agents")?;

    print!("{}", formatter.format_agents(&agents)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_configured() {
        let endpoint = resolve_project_endpoint(
            Some("https://flag.example".to_string()),
            Some("https://env.example".to_string()),
        )
        .unwrap();
        assert_eq!(endpoint, "https://flag.example");
    }

    #[test]
    fn test_blank_flag_falls_back_to_configured() {
        let endpoint =
            resolve_project_endpoint(Some("  ".to_string()), Some("https://env.example".to_string()))
                .unwrap();
        assert_eq!(endpoint, "https://env.example");
    }

    #[test]
    fn test_missing_endpoint_is_input_error() {
        let err = resolve_project_endpoint(None, None).unwrap_err();
        assert!(err.is_input_error());
    }
}
