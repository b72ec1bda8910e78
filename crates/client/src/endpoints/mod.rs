//! Upstream REST endpoint implementations.
//!
//! Each function performs exactly one HTTP call and returns the decoded
//! upstream shape. Failure handling (degrade-to-empty) belongs to the
//! callers in [`crate::ResourceAggregator`], [`crate::AccessResolver`] and
//! [`crate::FoundryGraphService`].

mod accounts;
mod agents;
mod request;
mod role_assignments;
mod subscriptions;
pub mod url_encoding;
mod workspaces;

pub use accounts::{list_accounts, list_hub_projects};
pub use agents::{agents_base_url, get_agent, list_agents};
pub use request::{read_json, send_request};
pub use role_assignments::{list_role_assignments, normalize_resource_id};
pub use subscriptions::list_subscriptions;
pub use url_encoding::encode_path_segment;
pub use workspaces::list_workspaces;
