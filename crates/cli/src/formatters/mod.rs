//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render graph query results as pretty JSON or tab-separated tables.
//!
//! Does NOT handle:
//! - Printing (formatters return strings; commands print them).
//!
//! Invariants:
//! - JSON output is exactly the serialized graph shape; empty results are `[]`.
//! - Tables print a human message for empty results and `N/A` for missing values.

mod json;
mod table;

use anyhow::Result;
use foundry_client::{
    AgentNode, FoundryResources, RoleAssignment, Subscription, WorkspaceEndpointProbe,
};

use crate::args::OutputFormat;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Placeholder for absent values in human-readable output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Renders each graph query's result.
pub trait Formatter {
    fn format_subscriptions(&self, subscriptions: &[Subscription]) -> Result<String>;

    fn format_resources(&self, resources: &FoundryResources) -> Result<String>;

    fn format_agents(&self, agents: &[AgentNode]) -> Result<String>;

    fn format_role_assignments(&self, assignments: &[RoleAssignment]) -> Result<String>;

    fn format_workspace_probes(&self, probes: &[WorkspaceEndpointProbe]) -> Result<String>;
}

/// Get a formatter for the given output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
