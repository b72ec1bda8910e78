//! Data models for the management-plane and agent APIs.
//!
//! Two kinds of model live here:
//! - Upstream shapes (`CognitiveAccount`, `MlWorkspace`, `HubChildProject`,
//!   `AgentListResponse`), read leniently with every field optional.
//! - Produced shapes (`Hub`, `Project`, `AgentNode`, ...), serialized as the
//!   camelCase JSON the graph consumer expects.

pub mod access;
pub mod agents;
pub mod arm;
pub mod resources;
pub mod subscriptions;

pub use access::{AccessSummary, RoleAssignment};
pub use agents::{AgentListResponse, AgentNode, Resource, Tool};
pub use arm::{ArmErrorResponse, ArmListResponse};
pub use resources::{
    AccountProperties, CognitiveAccount, FoundryResources, Hub, HubChildProject, MlWorkspace,
    Project, WorkspaceEndpointProbe, WorkspaceProperties,
};
pub use subscriptions::Subscription;
