//! Agent models.
//!
//! Raw agents are opaque JSON (their schema moves with the tool type and API
//! version); [`AgentNode`] is the canonical normalized record produced by
//! [`crate::AgentGraphParser`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Agent listing envelope. Depending on API version the items are under
/// `value` or `data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentListResponse {
    #[serde(default, deserialize_with = "crate::serde_helpers::lenient_vec")]
    pub value: Vec<Value>,
    #[serde(default, deserialize_with = "crate::serde_helpers::lenient_vec")]
    pub data: Vec<Value>,
}

impl AgentListResponse {
    /// Items from `value`, else from `data`, else none.
    pub fn into_items(self) -> Vec<Value> {
        if !self.value.is_empty() {
            self.value
        } else {
            self.data
        }
    }
}

/// A capability attached to an agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(rename = "type")]
    pub tool_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable descriptor of what the tool is wired to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

/// One flattened entry of an agent's tool-resource map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub detail: String,
}

/// Normalized agent graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentNode {
    pub id: String,
    pub name: String,
    pub model: String,
    pub tools: Vec<Tool>,
    pub resources: Vec<Resource>,
    /// Distinct principals with a role on the owning project
    pub access_count: usize,
    pub project_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_prefers_value_then_data() {
        let list: AgentListResponse =
            serde_json::from_value(json!({"value": [{"id": "a"}], "data": [{"id": "b"}]}))
                .unwrap();
        assert_eq!(list.into_items(), vec![json!({"id": "a"})]);

        let list: AgentListResponse =
            serde_json::from_value(json!({"value": [], "data": [{"id": "b"}]})).unwrap();
        assert_eq!(list.into_items(), vec![json!({"id": "b"})]);

        let list: AgentListResponse = serde_json::from_value(json!({"object": "list"})).unwrap();
        assert!(list.into_items().is_empty());
    }

    #[test]
    fn test_tool_omits_absent_fields() {
        let tool = Tool {
            tool_type: "file_search".to_string(),
            connection: Some("VS: vs1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&tool).unwrap(),
            json!({"type": "file_search", "connection": "VS: vs1"})
        );
    }

    #[test]
    fn test_agent_node_serializes_camel_case() {
        let node = AgentNode {
            id: "a1".to_string(),
            name: "Bot".to_string(),
            model: "gpt-4o".to_string(),
            tools: vec![],
            resources: vec![],
            access_count: 3,
            project_id: Some("/subscriptions/S/p".to_string()),
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["accessCount"], 3);
        assert_eq!(value["projectId"], "/subscriptions/S/p");
    }
}
