//! Table formatter implementation.
//!
//! Tab-separated columns, one header row, one row per item.

use anyhow::Result;
use foundry_client::{
    AgentNode, FoundryResources, RoleAssignment, Subscription, WorkspaceEndpointProbe,
};
use serde_json::Value;

use super::{DEFAULT_MISSING_VALUE, Formatter};

/// Human-readable tab-separated tables.
pub struct TableFormatter;

fn or_missing(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(DEFAULT_MISSING_VALUE)
}

fn join_or_missing(values: impl Iterator<Item = String>) -> String {
    let joined = values.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        DEFAULT_MISSING_VALUE.to_string()
    } else {
        joined
    }
}

impl Formatter for TableFormatter {
    fn format_subscriptions(&self, subscriptions: &[Subscription]) -> Result<String> {
        if subscriptions.is_empty() {
            return Ok("No subscriptions found.\n".to_string());
        }

        let mut output = String::from("Subscription ID\tName\tState\n");
        for sub in subscriptions {
            output.push_str(&format!(
                "{}\t{}\t{}\n",
                or_missing(sub.subscription_id.as_deref()),
                or_missing(sub.display_name.as_deref()),
                or_missing(sub.state.as_deref()),
            ));
        }
        Ok(output)
    }

    fn format_resources(&self, resources: &FoundryResources) -> Result<String> {
        if resources.hubs.is_empty() && resources.projects.is_empty() {
            return Ok("No hubs or projects found.\n".to_string());
        }

        let mut output = String::from("Hubs\nName\tResource Group\tLocation\tDefault Project\n");
        for hub in &resources.hubs {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                hub.name,
                or_missing(Some(hub.resource_group.as_str())),
                or_missing(Some(hub.location.as_str())),
                or_missing(hub.default_project.as_deref()),
            ));
        }

        output.push_str("\nProjects\nName\tResource Group\tLocation\tEndpoint\tHub\n");
        for project in &resources.projects {
            let hub_name = project
                .hub_id
                .as_deref()
                .and_then(|id| id.rsplit('/').next());
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                or_missing(Some(project.name.as_str())),
                or_missing(Some(project.resource_group.as_str())),
                or_missing(Some(project.location.as_str())),
                or_missing(project.endpoint.as_deref()),
                or_missing(hub_name),
            ));
        }
        Ok(output)
    }

    fn format_agents(&self, agents: &[AgentNode]) -> Result<String> {
        if agents.is_empty() {
            return Ok("No agents found.\n".to_string());
        }

        let mut output = String::from("ID\tName\tModel\tTools\tAccess\n");
        for agent in agents {
            let tools = join_or_missing(agent.tools.iter().map(|tool| {
                match &tool.connection {
                    Some(connection) => format!("{} ({})", tool.tool_type, connection),
                    None => tool.tool_type.clone(),
                }
            }));
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                agent.id, agent.name, agent.model, tools, agent.access_count
            ));
        }
        Ok(output)
    }

    fn format_role_assignments(&self, assignments: &[RoleAssignment]) -> Result<String> {
        if assignments.is_empty() {
            return Ok("No role assignments found.\n".to_string());
        }

        let mut output = String::from("Principal\tType\tRole Definition\tScope\n");
        for assignment in assignments {
            let property = |key: &str| {
                assignment
                    .0
                    .get("properties")
                    .and_then(|p| p.get(key))
                    .and_then(Value::as_str)
            };
            let role = property("roleDefinitionId").and_then(|id| id.rsplit('/').next());
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                or_missing(assignment.principal_id()),
                or_missing(property("principalType")),
                or_missing(role),
                or_missing(property("scope")),
            ));
        }
        Ok(output)
    }

    fn format_workspace_probes(&self, probes: &[WorkspaceEndpointProbe]) -> Result<String> {
        if probes.is_empty() {
            return Ok("No project workspaces found.\n".to_string());
        }

        let mut output = String::from("Name\tProperty\tValue\n");
        for probe in probes {
            let name = or_missing(probe.name.as_deref());
            output.push_str(&format!(
                "{}\tdiscoveryUrl\t{}\n",
                name,
                or_missing(probe.discovery_url.as_deref())
            ));
            for (key, value) in &probe.endpoint_properties {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                output.push_str(&format!("{}\t{}\t{}\n", name, key, rendered));
            }
        }
        Ok(output)
    }
}
