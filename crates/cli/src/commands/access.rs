//! Access command implementation.

use anyhow::{Context, Result};
use foundry_client::FoundryGraphService;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::formatters::Formatter;

pub async fn run(
    service: &FoundryGraphService<'_>,
    resource_id: &str,
    formatter: &dyn Formatter,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(resource_id, "Listing role assignments");

    let assignments = cancel
        .run(service.role_assignments(resource_id))
        .await?
        .context("Failed to list role assignments")?;

    print!("{}", formatter.format_role_assignments(&assignments)?);
    Ok(())
}
