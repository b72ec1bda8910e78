//! Resources command implementation.

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
    info!(subscription_id, "Listing hubs and projects");

    let resources = cancel
        .run(service.list_resources(subscription_id))
        .await?
        .context("Failed to list resources")?;

    print!("{}", formatter.format_resources(&resources)?);
    Ok(())
}
