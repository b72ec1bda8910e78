//! Subscriptions command implementation.

use anyhow::Result;
use foundry_client::FoundryGraphService;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::formatters::Formatter;

pub async fn run(
    service: &FoundryGraphService<'_>,
    formatter: &dyn Formatter,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Listing subscriptions");

    let subscriptions = cancel.run(service.list_subscriptions()).await?;

    print!("{}", formatter.format_subscriptions(&subscriptions)?);
    Ok(())
}
