//! Role-assignment lookup reduced to a distinct-principal count.
//!
//! Assignments are reported verbatim; no authorization decision is made here.

use std::collections::HashSet;

use tracing::debug;

use crate::client::FoundryClient;
use crate::fetch::Fetched;
use crate::models::{AccessSummary, RoleAssignment};

/// Resolves who has access to a resource.
pub struct AccessResolver<'a> {
    client: &'a FoundryClient,
}

impl<'a> AccessResolver<'a> {
    pub fn new(client: &'a FoundryClient) -> Self {
        Self { client }
    }

    /// Fetch role assignments for `resource_id`.
    ///
    /// A failed fetch yields no assignments and a count of 0.
    pub async fn resolve(&self, resource_id: &str) -> AccessSummary {
        let assignments =
            Fetched::from_result(self.client.list_role_assignments(resource_id).await)
                .into_logged_value("list_role_assignments", self.client.metrics());

        let access_count = distinct_principal_count(&assignments);
        debug!(
            resource_id,
            assignments = assignments.len(),
            access_count,
            "Resolved access"
        );

        AccessSummary {
            access_count,
            assignments,
        }
    }
}

/// Number of distinct `properties.principalId` values.
///
/// Assignments without a principal id are not counted.
pub fn distinct_principal_count(assignments: &[RoleAssignment]) -> usize {
    assignments
        .iter()
        .filter_map(RoleAssignment::principal_id)
        .collect::<HashSet<_>>()
        .len()
}
