//! Access resolution tests.
//!
//! # Invariants
//! - The count is the number of distinct principal ids
//! - A failed fetch yields zero and no assignments

mod common;

use common::*;
use foundry_client::AccessResolver;

fn role_assignments_path() -> String {
    format!(
        "{}/providers/Microsoft.Authorization/roleAssignments",
        CONTOSO_HUB_ID
    )
}

#[tokio::test]
async fn test_resolve_counts_distinct_principals() {
    let mock_server = MockServer::start().await;
    mount_json(
        &mock_server,
        &role_assignments_path(),
        &load_fixture("management/role_assignments.json"),
    )
    .await;

    let client = static_client(&mock_server.uri());
    let summary = AccessResolver::new(&client).resolve(CONTOSO_HUB_ID).await;

    assert_eq!(summary.assignments.len(), 3);
    assert_eq!(summary.access_count, 2);
}

#[tokio::test]
async fn test_resolve_failure_is_zero() {
    let mock_server = MockServer::start().await;
    mount_error(&mock_server, &role_assignments_path(), 403).await;

    let client = static_client(&mock_server.uri());
    let summary = AccessResolver::new(&client).resolve(CONTOSO_HUB_ID).await;

    assert_eq!(summary.access_count, 0);
    assert!(summary.assignments.is_empty());
}
