//! JSON formatter implementation.

use anyhow::Result;
use foundry_client::{
    AgentNode, FoundryResources, RoleAssignment, Subscription, WorkspaceEndpointProbe,
};

use super::Formatter;

/// Pretty-printed JSON, newline terminated.
pub struct JsonFormatter;

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}

impl Formatter for JsonFormatter {
    fn format_subscriptions(&self, subscriptions: &[Subscription]) -> Result<String> {
        to_json(subscriptions)
    }

    fn format_resources(&self, resources: &FoundryResources) -> Result<String> {
        to_json(resources)
    }

    fn format_agents(&self, agents: &[AgentNode]) -> Result<String> {
        to_json(agents)
    }

    fn format_role_assignments(&self, assignments: &[RoleAssignment]) -> Result<String> {
        to_json(assignments)
    }

    fn format_workspace_probes(&self, probes: &[WorkspaceEndpointProbe]) -> Result<String> {
        to_json(probes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_empty_lists_are_valid_json() {
        let output = JsonFormatter.format_agents(&[]).unwrap();
        assert_eq!(output, "[]\n");
    }

    #[test]
    fn test_resources_shape() {
        let output = JsonFormatter
            .format_resources(&FoundryResources::default())
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value, json!({"hubs": [], "projects": []}));
    }

    #[test]
    fn test_role_assignments_pass_through() {
        let raw = json!({"id": "ra-1", "properties": {"principalId": "p-1"}});
        let output = JsonFormatter
            .format_role_assignments(&[RoleAssignment(raw.clone())])
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value, json!([raw]));
    }
}
