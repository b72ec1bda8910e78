//! Hub and project models.
//!
//! Upstream shapes come from three independently versioned collections:
//! cognitive-services accounts (hubs), ML workspaces (projects), and the
//! per-hub child project collection. They are merged into [`FoundryResources`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Cognitive-services account as listed per subscription.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CognitiveAccount {
    #[serde(default, deserialize_with = "crate::serde_helpers::opt_non_empty_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::opt_non_empty_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::opt_non_empty_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::opt_non_empty_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::default_on_invalid")]
    pub properties: AccountProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountProperties {
    #[serde(default, deserialize_with = "crate::serde_helpers::opt_non_empty_string")]
    pub endpoint: Option<String>,
    #[serde(
        rename = "defaultProject",
        default,
        deserialize_with = "crate::serde_helpers::opt_non_empty_string"
    )]
    pub default_project: Option<String>,
}

/// ML workspace as listed per subscription.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MlWorkspace {
    #[serde(default, deserialize_with = "crate::serde_helpers::opt_non_empty_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::opt_non_empty_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::opt_non_empty_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::opt_non_empty_string")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::default_on_invalid")]
    pub properties: WorkspaceProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceProperties {
    #[serde(
        rename = "hubResourceId",
        default,
        deserialize_with = "crate::serde_helpers::opt_non_empty_string"
    )]
    pub hub_resource_id: Option<String>,
    #[serde(
        rename = "discoveryUrl",
        default,
        deserialize_with = "crate::serde_helpers::opt_non_empty_string"
    )]
    pub discovery_url: Option<String>,
    /// Every other property, kept for endpoint probing.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Child project listed under a hub's own resource id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HubChildProject {
    #[serde(default, deserialize_with = "crate::serde_helpers::opt_non_empty_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::opt_non_empty_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_helpers::opt_non_empty_string")]
    pub location: Option<String>,
}

/// A top-level AI-services account that owns zero or more projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hub {
    pub id: String,
    pub name: String,
    pub location: String,
    pub resource_group: String,
    /// Lower-cased upstream kind (always `aiservices` after filtering)
    pub kind: String,
    pub endpoint: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub default_project: Option<String>,
}

/// A deployable scope containing agents.
///
/// Either a genuine workspace / child project, or a hub acting as its own
/// project (in which case `id == hub_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub location: String,
    pub resource_group: String,
    pub kind: String,
    pub endpoint: Option<String>,
    pub hub_id: Option<String>,
}

/// Merged, de-duplicated hub → project tree for one subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundryResources {
    pub hubs: Vec<Hub>,
    pub projects: Vec<Project>,
}

/// Endpoint-like properties of one project workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceEndpointProbe {
    pub id: Option<String>,
    pub name: Option<String>,
    pub discovery_url: Option<String>,
    /// Properties whose key mentions `url`, `endpoint`, or `uri`, in upstream order.
    pub endpoint_properties: Map<String, Value>,
}

impl WorkspaceEndpointProbe {
    /// Collect endpoint-like properties from a workspace.
    pub fn from_workspace(workspace: &MlWorkspace) -> Self {
        let endpoint_properties = workspace
            .properties
            .other
            .iter()
            .filter(|(key, _)| {
                let key = key.to_lowercase();
                key.contains("url") || key.contains("endpoint") || key.contains("uri")
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            id: workspace.id.clone(),
            name: workspace.name.clone(),
            discovery_url: workspace.properties.discovery_url.clone(),
            endpoint_properties,
        }
    }
}
