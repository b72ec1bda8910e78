//! Command dispatch logic.
//!
//! Responsibilities:
//! - Load configuration and build the request-scoped client.
//! - Route the parsed subcommand to its handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//!
//! Invariants:
//! - One client per invocation; it is dropped when the command returns.

use anyhow::Result;
use foundry_client::FoundryGraphService;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::formatters::get_formatter;

pub(crate) async fn run_command(cli: Cli, cancel: &CancellationToken) -> Result<()> {
    let config = commands::load_config(&cli)?;

    let client = commands::build_client(&config, cli.metrics_bind.is_some())?;
    let service = FoundryGraphService::new(&client);
    let formatter = get_formatter(cli.output);
    let formatter = formatter.as_ref();

    match cli.command {
        Commands::Subscriptions => {
            commands::subscriptions::run(&service, formatter, cancel).await?;
        }
        Commands::Resources { subscription_id } => {
            commands::resources::run(&service, &subscription_id, formatter, cancel).await?;
        }
        Commands::Agents {
            project_endpoint,
            project_id,
        } => {
            let project_endpoint = commands::agents::resolve_project_endpoint(
                project_endpoint,
                config.defaults.project_endpoint.clone(),
            )?;
            commands::agents::run(
                &service,
                &project_endpoint,
                project_id.as_deref(),
                formatter,
                cancel,
            )
            .await?;
        }
        Commands::Access { resource_id } => {
            commands::access::run(&service, &resource_id, formatter, cancel).await?;
        }
        Commands::ProbeWorkspaces { subscription_id } => {
            commands::probe_workspaces::run(&service, &subscription_id, formatter, cancel).await?;
        }
    }

    Ok(())
}
