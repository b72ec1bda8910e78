//! Resource aggregation tests.
//!
//! Drives `ResourceAggregator` against mocked management-plane collections:
//! - Hubs, workspace projects, hub children and self-projects are merged
//! - Per-step failures shrink the result without aborting later steps
//!
//! # Invariants
//! - No duplicate project ids; first write wins
//! - Every hub is represented in the project tree

mod common;

use common::*;
use foundry_client::{FoundryResources, ResourceAggregator};
use std::collections::HashSet;

fn project_names(resources: &FoundryResources) -> Vec<&str> {
    resources.projects.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn test_aggregate_merges_all_sources() {
    let mock_server = MockServer::start().await;
    mount_management_fixtures(&mock_server).await;

    let client = static_client(&mock_server.uri());
    let resources = ResourceAggregator::new(&client).aggregate(SUBSCRIPTION_ID).await;

    let hub_names: Vec<&str> = resources.hubs.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(hub_names, vec!["contoso-hub", "legacy-hub"]);

    assert_eq!(
        project_names(&resources),
        vec!["research", "ml-proj", "support", "contoso-hub", "legacy-hub"]
    );

    let research = &resources.projects[0];
    assert_eq!(
        research.endpoint.as_deref(),
        Some("https://contoso-hub.services.ai.azure.com/api/projects/research")
    );
    assert_eq!(research.hub_id.as_deref(), Some(CONTOSO_HUB_ID));
    assert_eq!(research.resource_group, "rg-ai");

    let ml_proj = &resources.projects[1];
    assert_eq!(
        ml_proj.endpoint.as_deref(),
        Some("https://westus2.api.azureml.ms/discovery")
    );
    assert!(ml_proj.hub_id.is_none());

    let support = &resources.projects[2];
    assert_eq!(
        support.endpoint.as_deref(),
        Some("https://contoso-hub.services.ai.azure.com/api/projects/support")
    );
    assert_eq!(support.hub_id.as_deref(), Some(CONTOSO_HUB_ID));
}

#[tokio::test]
async fn test_self_projects_reference_their_hub() {
    let mock_server = MockServer::start().await;
    mount_management_fixtures(&mock_server).await;

    let client = static_client(&mock_server.uri());
    let resources = ResourceAggregator::new(&client).aggregate(SUBSCRIPTION_ID).await;

    let contoso_self = resources
        .projects
        .iter()
        .find(|p| p.id == CONTOSO_HUB_ID)
        .unwrap();
    assert_eq!(contoso_self.name, "contoso-hub");
    assert_eq!(contoso_self.hub_id.as_deref(), Some(CONTOSO_HUB_ID));
    assert_eq!(
        contoso_self.endpoint.as_deref(),
        Some("https://contoso-hub.services.ai.azure.com/api/projects/support")
    );

    let legacy_self = resources
        .projects
        .iter()
        .find(|p| p.id == LEGACY_HUB_ID)
        .unwrap();
    assert_eq!(legacy_self.resource_group, "rg-legacy");
    assert_eq!(legacy_self.location, "westeurope");
    assert_eq!(
        legacy_self.endpoint.as_deref(),
        Some("https://legacy-hub.services.ai.azure.com/api/projects/legacy-hub")
    );
}

#[tokio::test]
async fn test_duplicate_child_loses_to_workspace_project() {
    let mock_server = MockServer::start().await;
    mount_management_fixtures(&mock_server).await;

    let client = static_client(&mock_server.uri());
    let resources = ResourceAggregator::new(&client).aggregate(SUBSCRIPTION_ID).await;

    assert!(!project_names(&resources).contains(&"research-duplicate"));

    let ids: HashSet<&str> = resources.projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), resources.projects.len());
}

#[tokio::test]
async fn test_account_failure_still_lists_workspaces() {
    let mock_server = MockServer::start().await;
    mount_error(&mock_server, ACCOUNTS_PATH, 403).await;
    mount_json(
        &mock_server,
        WORKSPACES_PATH,
        &load_fixture("management/workspaces.json"),
    )
    .await;

    let client = static_client(&mock_server.uri());
    let resources = ResourceAggregator::new(&client).aggregate(SUBSCRIPTION_ID).await;

    assert!(resources.hubs.is_empty());
    assert_eq!(project_names(&resources), vec!["research", "ml-proj"]);
}

#[tokio::test]
async fn test_workspace_failure_still_synthesizes_self_projects() {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        ACCOUNTS_PATH,
        &load_fixture("management/accounts.json"),
    )
    .await;
    mount_error(&mock_server, WORKSPACES_PATH, 500).await;

    let client = static_client(&mock_server.uri());
    let resources = ResourceAggregator::new(&client).aggregate(SUBSCRIPTION_ID).await;

    assert_eq!(resources.hubs.len(), 2);
    assert_eq!(project_names(&resources), vec!["contoso-hub", "legacy-hub"]);
}

#[tokio::test]
async fn test_everything_failing_yields_empty_result() {
    let mock_server = MockServer::start().await;

    let client = static_client(&mock_server.uri());
    let resources = ResourceAggregator::new(&client).aggregate(SUBSCRIPTION_ID).await;

    assert_eq!(resources, FoundryResources::default());
}

#[tokio::test]
async fn test_probe_reports_project_workspaces_only() {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        WORKSPACES_PATH,
        &load_fixture("management/workspaces.json"),
    )
    .await;

    let client = static_client(&mock_server.uri());
    let probes = ResourceAggregator::new(&client)
        .probe_workspace_endpoints(SUBSCRIPTION_ID)
        .await;

    assert_eq!(probes.len(), 2);
    assert_eq!(probes[0].name.as_deref(), Some("research"));
    let keys: Vec<&str> = probes[0]
        .endpoint_properties
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, vec!["mlFlowTrackingUri", "agentsEndpointUri"]);
    assert!(probes[1].endpoint_properties.is_empty());
}
