//! Role-assignment models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One role assignment, passed through verbatim.
///
/// Only `properties.principalId` is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleAssignment(pub Value);

impl RoleAssignment {
    /// The assignment's principal id, if present and a string.
    pub fn principal_id(&self) -> Option<&str> {
        self.0
            .pointer("/properties/principalId")
            .and_then(Value::as_str)
    }
}

/// Role assignments for one resource, reduced to a distinct-principal count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessSummary {
    pub access_count: usize,
    pub assignments: Vec<RoleAssignment>,
}
