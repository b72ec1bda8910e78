//! CLI command implementations.
//!
//! Each command runs exactly one graph query against a freshly built,
//! request-scoped client and prints the formatted result on stdout.

pub mod access;
pub mod agents;
pub mod probe_workspaces;
pub mod resources;
pub mod subscriptions;

use anyhow::{Context, Result};
use foundry_client::{FoundryClient, MetricsCollector};
use foundry_config::{Config, ConfigLoader};

use crate::args::Cli;

/// Load configuration from the environment with CLI flag overrides on top.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let loader = ConfigLoader::new()
        .from_env()
        .context("Failed to load configuration from environment")?;
    cli.apply_overrides(loader)
        .build()
        .context("Failed to build configuration")
}

/// Build the client for one invocation.
pub fn build_client(config: &Config, with_metrics: bool) -> Result<FoundryClient> {
    let mut builder = FoundryClient::builder().from_config(config);
    if with_metrics {
        builder = builder.metrics(MetricsCollector::new());
    }
    builder.build().context("Failed to build client")
}
