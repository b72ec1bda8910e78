//! Hub/project aggregation across the three upstream collections.
//!
//! Responsibilities:
//! - Fetch cognitive-services accounts (hubs), ML workspaces (projects) and
//!   each hub's child projects, sequentially.
//! - Infer every project's data-plane endpoint.
//! - Synthesize a self-project for each hub not otherwise represented.
//! - Merge everything into one de-duplicated [`FoundryResources`].
//!
//! Does NOT handle:
//! - Caller-input validation (done by [`crate::FoundryGraphService`]).
//!
//! Invariants:
//! - Each fetch step is fault-isolated: a failure yields an empty contribution
//!   for that step only.
//! - No two projects share an `id`; first write wins in the order
//!   workspaces, hub children, self-projects.
//! - Every hub id appears as some project's `id` or `hubId`.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::client::FoundryClient;
use crate::fetch::Fetched;
use crate::models::{
    CognitiveAccount, FoundryResources, Hub, HubChildProject, MlWorkspace, Project,
    WorkspaceEndpointProbe,
};
use foundry_config::constants::{AZUREML_HOST_SUFFIX, HUB_RESOURCE_TYPE, SERVICES_HOST_SUFFIX};

const HUB_KIND: &str = "aiservices";
const PROJECT_KIND: &str = "project";

/// Fetches and merges hubs and projects for a subscription.
pub struct ResourceAggregator<'a> {
    client: &'a FoundryClient,
}

impl<'a> ResourceAggregator<'a> {
    pub fn new(client: &'a FoundryClient) -> Self {
        Self { client }
    }

    /// Build the merged hub → project tree for one subscription.
    ///
    /// Never fails; upstream failures shrink the result instead.
    pub async fn aggregate(&self, subscription_id: &str) -> FoundryResources {
        let metrics = self.client.metrics();

        let accounts = Fetched::from_result(self.client.list_accounts(subscription_id).await)
            .into_logged_value("list_accounts", metrics);
        let hubs = hubs_from_accounts(accounts);

        let workspaces = Fetched::from_result(self.client.list_workspaces(subscription_id).await)
            .into_logged_value("list_workspaces", metrics);
        let workspace_projects = projects_from_workspaces(workspaces);

        let mut child_projects = Vec::new();
        for hub in &hubs {
            let children = Fetched::from_result(self.client.list_hub_projects(&hub.id).await)
                .into_logged_value("list_hub_projects", metrics);
            debug!(hub = %hub.name, children = children.len(), "Listed hub child projects");
            child_projects.extend(projects_from_hub_children(hub, children));
        }

        let projects = merge_projects(&hubs, workspace_projects, child_projects);

        info!(
            subscription_id,
            hubs = hubs.len(),
            projects = projects.len(),
            "Aggregated foundry resources"
        );

        FoundryResources { hubs, projects }
    }

    /// Report endpoint-like properties of every project workspace.
    pub async fn probe_workspace_endpoints(
        &self,
        subscription_id: &str,
    ) -> Vec<WorkspaceEndpointProbe> {
        Fetched::from_result(self.client.list_workspaces(subscription_id).await)
            .into_logged_value("list_workspaces", self.client.metrics())
            .iter()
            .filter(|ws| is_kind(ws.kind.as_deref(), PROJECT_KIND))
            .map(WorkspaceEndpointProbe::from_workspace)
            .collect()
    }
}

/// Resource group of a resource id (`/subscriptions/{s}/resourceGroups/{rg}/...`),
/// or empty when the id is too short.
pub fn resource_group_from_id(id: &str) -> String {
    id.split('/').nth(4).unwrap_or_default().to_string()
}

/// Data-plane endpoint of a project hosted under a hub.
pub fn hub_project_endpoint(hub_name: &str, project_name: &str) -> String {
    format!(
        "https://{}.{}/api/projects/{}",
        hub_name, SERVICES_HOST_SUFFIX, project_name
    )
}

/// Endpoint for a workspace project: hub-hosted, then discovery URL, then
/// the regional workspace host.
///
/// `None` only when the workspace has neither a name nor a discovery URL.
pub fn workspace_endpoint(workspace: &MlWorkspace) -> Option<String> {
    let name = workspace.name.as_deref();
    let props = &workspace.properties;

    if let (Some(hub_id), Some(name)) = (props.hub_resource_id.as_deref(), name) {
        return Some(hub_project_endpoint(last_segment(hub_id), name));
    }
    if let Some(discovery_url) = &props.discovery_url {
        return Some(discovery_url.clone());
    }
    name.map(|name| match workspace.location.as_deref() {
        Some(location) => format!("https://{}.{}.{}", name, location, AZUREML_HOST_SUFFIX),
        None => format!("https://{}.{}", name, AZUREML_HOST_SUFFIX),
    })
}

/// Hubs are the `AIServices` accounts (kind compared case-insensitively).
/// Accounts missing an id or name are skipped.
pub fn hubs_from_accounts(accounts: Vec<CognitiveAccount>) -> Vec<Hub> {
    accounts
        .into_iter()
        .filter(|account| is_kind(account.kind.as_deref(), HUB_KIND))
        .filter_map(|account| {
            let id = account.id?;
            let name = account.name?;
            Some(Hub {
                resource_group: resource_group_from_id(&id),
                id,
                name,
                location: account.location.unwrap_or_default(),
                kind: HUB_KIND.to_string(),
                endpoint: account.properties.endpoint,
                resource_type: HUB_RESOURCE_TYPE.to_string(),
                default_project: account.properties.default_project,
            })
        })
        .collect()
}

/// Projects from the workspace listing (kind `project`, case-insensitive).
pub fn projects_from_workspaces(workspaces: Vec<MlWorkspace>) -> Vec<Project> {
    workspaces
        .into_iter()
        .filter(|ws| is_kind(ws.kind.as_deref(), PROJECT_KIND))
        .filter_map(|ws| {
            let endpoint = workspace_endpoint(&ws);
            let id = ws.id?;
            Some(Project {
                resource_group: resource_group_from_id(&id),
                id,
                name: ws.name.unwrap_or_default(),
                location: ws.location.unwrap_or_default(),
                kind: PROJECT_KIND.to_string(),
                endpoint,
                hub_id: ws.properties.hub_resource_id,
            })
        })
        .collect()
}

/// Projects nested under one hub. The endpoint uses the hub's name.
pub fn projects_from_hub_children(hub: &Hub, children: Vec<HubChildProject>) -> Vec<Project> {
    children
        .into_iter()
        .filter_map(|child| {
            let id = child.id?;
            let endpoint = child
                .name
                .as_deref()
                .map(|name| hub_project_endpoint(&hub.name, name));
            Some(Project {
                resource_group: resource_group_from_id(&id),
                id,
                name: child.name.unwrap_or_default(),
                location: child.location.unwrap_or_default(),
                kind: PROJECT_KIND.to_string(),
                endpoint,
                hub_id: Some(hub.id.clone()),
            })
        })
        .collect()
}

/// The hub acting as its own project.
///
/// Keeps the hub's name; the endpoint targets the hub's default project
/// when it has one.
pub fn self_project(hub: &Hub) -> Project {
    let project_name = hub.default_project.as_deref().unwrap_or(&hub.name);
    Project {
        id: hub.id.clone(),
        name: hub.name.clone(),
        location: hub.location.clone(),
        resource_group: hub.resource_group.clone(),
        kind: PROJECT_KIND.to_string(),
        endpoint: Some(hub_project_endpoint(&hub.name, project_name)),
        hub_id: Some(hub.id.clone()),
    }
}

/// Merge project sources in priority order, then add self-projects for hubs
/// whose id is not yet present.
pub fn merge_projects(
    hubs: &[Hub],
    workspace_projects: Vec<Project>,
    child_projects: Vec<Project>,
) -> Vec<Project> {
    let mut seen = HashSet::new();
    let mut merged: Vec<Project> = workspace_projects
        .into_iter()
        .chain(child_projects)
        .filter(|project| seen.insert(project.id.clone()))
        .collect();

    for hub in hubs {
        if seen.insert(hub.id.clone()) {
            merged.push(self_project(hub));
        }
    }

    merged
}

fn is_kind(kind: Option<&str>, expected: &str) -> bool {
    kind.is_some_and(|kind| kind.eq_ignore_ascii_case(expected))
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
