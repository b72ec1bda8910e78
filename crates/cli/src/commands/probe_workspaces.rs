//! Workspace endpoint probe command implementation.

use anyhow::{Context, Result};
use foundry_client::FoundryGraphService;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::formatters::Formatter;

pub async fn run(
    service: &FoundryGraphService<'_>,
    subscription_id: &str,
    formatter: &dyn Formatter,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(subscription_id, "Probing workspace endpoints");

    let probes = cancel
        .run(service.workspace_endpoint_probe(subscription_id))
        .await?
        .context("Failed to probe workspace endpoints")?;

    print!("{}", formatter.format_workspace_probes(&probes)?);
    Ok(())
}
