//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map global connection flags onto the configuration loader.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand, ValueEnum};
use foundry_config::ConfigLoader;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "foundry-cli")]
#[command(about = "Discover AI hubs, projects and agents across a subscription", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  foundry-cli subscriptions\n  foundry-cli resources 00000000-0000-0000-0000-000000000000\n  foundry-cli agents --project-endpoint https://hub.services.ai.azure.com/api/projects/p1\n  foundry-cli -o table access /subscriptions/S/resourceGroups/rg/providers/Microsoft.CognitiveServices/accounts/hub\n"
)]
pub struct Cli {
    /// Management-plane base URL (e.g., https://management.azure.com)
    #[arg(long, global = true, env = "FOUNDRY_MANAGEMENT_URL")]
    pub management_url: Option<String>,

    /// Timeout in seconds for lightweight lookups
    #[arg(long, global = true, value_name = "SECS")]
    pub lookup_timeout: Option<u64>,

    /// Timeout in seconds for listing calls
    #[arg(long, global = true, value_name = "SECS")]
    pub listing_timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Emit logs on stderr as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// OTLP collector endpoint for trace export (e.g., http://localhost:4317)
    #[arg(long, global = true, env = "FOUNDRY_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Apply flag overrides on top of environment configuration.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> ConfigLoader {
        if let Some(ref url) = self.management_url {
            loader = loader.with_management_url(url.clone());
        }
        if let Some(secs) = self.lookup_timeout {
            loader = loader.with_lookup_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = self.listing_timeout {
            loader = loader.with_listing_timeout(Duration::from_secs(secs));
        }
        loader
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List subscriptions visible to the caller
    Subscriptions,

    /// List hubs and projects in a subscription
    Resources {
        /// Subscription id
        subscription_id: String,
    },

    /// List the agents of a project as graph nodes
    Agents {
        /// Project data-plane endpoint (defaults to PROJECT_ENDPOINT)
        #[arg(long)]
        project_endpoint: Option<String>,

        /// Project resource id; annotates agents with its access count
        #[arg(long)]
        project_id: Option<String>,
    },

    /// List role assignments on a resource
    Access {
        /// Full resource id (leading slash optional)
        resource_id: String,
    },

    /// Report endpoint-like properties of project workspaces
    ProbeWorkspaces {
        /// Subscription id
        subscription_id: String,
    },
}
