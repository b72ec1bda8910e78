//! Property-based tests for project merging and endpoint inference.
//!
//! This module uses proptest to verify:
//! - Merged projects never share an id
//! - Every hub is represented by some project
//! - Endpoint inference is deterministic and hub-hosted when a hub is known
//!
//! # Test Coverage
//! - Arbitrary hub sets with overlapping workspace and child project ids
//! - Hubs with and without a default project

use foundry_client::models::MlWorkspace;
use foundry_client::testing::generators::arb_resource_name;
use foundry_client::{
    Hub, Project, hub_project_endpoint, merge_projects, resource_group_from_id, self_project,
    workspace_endpoint,
};
use proptest::prelude::*;
use serde_json::json;
use std::collections::HashSet;

fn hub_id(name: &str) -> String {
    format!("/subscriptions/S/resourceGroups/rg/providers/Microsoft.CognitiveServices/accounts/{name}")
}

fn hub(name: &str, default_project: Option<String>) -> Hub {
    let id = hub_id(name);
    Hub {
        resource_group: resource_group_from_id(&id),
        id,
        name: name.to_string(),
        location: "eastus".to_string(),
        kind: "aiservices".to_string(),
        endpoint: None,
        resource_type: "Microsoft.CognitiveServices/accounts".to_string(),
        default_project,
    }
}

fn project(id: String, name: &str) -> Project {
    Project {
        resource_group: resource_group_from_id(&id),
        id,
        name: name.to_string(),
        location: "eastus".to_string(),
        kind: "project".to_string(),
        endpoint: None,
        hub_id: None,
    }
}

fn arb_hubs() -> impl Strategy<Value = Vec<Hub>> {
    proptest::collection::btree_map(
        arb_resource_name(),
        proptest::option::of(arb_resource_name()),
        0..6,
    )
    .prop_map(|hubs| {
        hubs.into_iter()
            .map(|(name, default_project)| hub(&name, default_project))
            .collect()
    })
}

/// Project lists drawn from a small id space so duplicates are common.
fn arb_projects() -> impl Strategy<Value = Vec<Project>> {
    proptest::collection::vec(
        (
            prop_oneof![
                arb_resource_name().prop_map(|n| hub_id(&n)),
                "p[0-3]".prop_map(|n| format!("/subscriptions/S/resourceGroups/rg/projects/{n}")),
            ],
            arb_resource_name(),
        ),
        0..8,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(id, name)| project(id, &name))
            .collect()
    })
}

proptest! {
    /// Test that merged project ids are unique.
    #[test]
    fn test_merged_ids_unique(
        hubs in arb_hubs(),
        workspaces in arb_projects(),
        children in arb_projects(),
    ) {
        let merged = merge_projects(&hubs, workspaces, children);
        let ids: HashSet<&str> = merged.iter().map(|p| p.id.as_str()).collect();
        prop_assert_eq!(ids.len(), merged.len());
    }

    /// Test that every hub appears as a project id or a project's hub id.
    #[test]
    fn test_every_hub_represented(
        hubs in arb_hubs(),
        workspaces in arb_projects(),
        children in arb_projects(),
    ) {
        let merged = merge_projects(&hubs, workspaces, children);
        for hub in &hubs {
            let represented = merged
                .iter()
                .any(|p| p.id == hub.id || p.hub_id.as_deref() == Some(hub.id.as_str()));
            prop_assert!(represented, "hub {} missing", hub.name);
        }
    }

    /// Test that the first source to claim an id keeps it.
    ///
    /// # Invariants Tested
    /// - Workspace projects survive verbatim and in order
    /// - Later sources never replace an earlier project
    #[test]
    fn test_first_write_wins(
        hubs in arb_hubs(),
        workspaces in arb_projects(),
        children in arb_projects(),
    ) {
        let mut seen = HashSet::new();
        let expected_prefix: Vec<Project> = workspaces
            .iter()
            .filter(|p| seen.insert(p.id.clone()))
            .cloned()
            .collect();

        let merged = merge_projects(&hubs, workspaces, children);
        prop_assert_eq!(&merged[..expected_prefix.len()], &expected_prefix[..]);
    }

    /// Test that a self-project keeps the hub's name and targets its default project.
    #[test]
    fn test_self_project_endpoint(
        name in arb_resource_name(),
        default_project in proptest::option::of(arb_resource_name()),
    ) {
        let hub = hub(&name, default_project.clone());
        let project = self_project(&hub);

        prop_assert_eq!(&project.id, &hub.id);
        prop_assert_eq!(&project.name, &hub.name);
        prop_assert_eq!(project.hub_id.as_deref(), Some(hub.id.as_str()));
        let target = default_project.unwrap_or_else(|| name.clone());
        prop_assert_eq!(project.endpoint, Some(hub_project_endpoint(&name, &target)));
    }

    /// Test that a hub-linked workspace always gets a hub-hosted endpoint.
    #[test]
    fn test_workspace_endpoint_prefers_hub(
        hub_name in arb_resource_name(),
        name in arb_resource_name(),
        location in proptest::option::of("[a-z]{4,10}"),
    ) {
        let workspace: MlWorkspace = serde_json::from_value(json!({
            "id": "ws",
            "name": name,
            "location": location,
            "kind": "Project",
            "properties": {
                "hubResourceId": hub_id(&hub_name),
                "discoveryUrl": "https://eastus.api.azureml.ms/discovery"
            }
        }))
        .unwrap();

        let endpoint = workspace_endpoint(&workspace);
        prop_assert_eq!(endpoint.clone(), workspace_endpoint(&workspace));
        prop_assert_eq!(endpoint, Some(hub_project_endpoint(&hub_name, &name)));
    }
}
