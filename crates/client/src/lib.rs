//! Foundry resource and agent graph client.
//!
//! This crate discovers AI-platform hubs, projects, and the agents deployed
//! inside them across a subscription, and reduces the inconsistently shaped
//! upstream payloads into one uniform hub → project → agent graph.
//!
//! Every upstream call is fault-isolated: a failing sub-fetch degrades to an
//! empty contribution and is logged, it never aborts sibling calls.

mod access;
mod agent_graph;
mod aggregator;
mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
mod fetch;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
mod serde_helpers;
mod service;
pub mod tracing;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use access::{AccessResolver, distinct_principal_count};
pub use agent_graph::AgentGraphParser;
pub use aggregator::{
    ResourceAggregator, hub_project_endpoint, hubs_from_accounts, merge_projects,
    projects_from_hub_children, projects_from_workspaces, resource_group_from_id, self_project,
    workspace_endpoint,
};
pub use auth::{Credential, TokenAudience};
pub use client::FoundryClient;
pub use client::builder::FoundryClientBuilder;
pub use crate::tracing::{TracingConfig, TracingGuard};
pub use error::{ClientError, Result};
pub use fetch::Fetched;
pub use metrics::{CallOutcome, ErrorCategory, MetricsCollector};
pub use metrics_exporter::MetricsExporter;
pub use models::{
    AccessSummary, AgentNode, FoundryResources, Hub, Project, Resource, RoleAssignment,
    Subscription, Tool, WorkspaceEndpointProbe,
};
pub use service::FoundryGraphService;
