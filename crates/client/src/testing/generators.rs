//! Proptest strategies for upstream payloads.
//!
//! Agents are generated from the tool types and resource shapes seen across
//! API versions, including oddly typed fields, so property tests exercise the
//! fallback paths of the parser.

use proptest::prelude::*;
use serde_json::{Value, json};

/// Tool types the parser has specific rules for, plus a few it does not.
pub const TOOL_TYPES: &[&str] = &[
    "mcp",
    "file_search",
    "memory_search",
    "azure_ai_search",
    "cognitive_search",
    "bing_grounding",
    "code_interpreter",
    "function",
];

/// Keys a generated tool may carry besides `type`.
const TOOL_KEYS: &[&str] = &[
    "name",
    "connection_id",
    "server_label",
    "server_url",
    "project_connection_id",
    "memory_store_name",
    "index_name",
    "target",
];

/// Any JSON scalar, including ones of the wrong type for every field.
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z_]{0,12}".prop_map(Value::String),
        "[a-z]{1,8}".prop_map(|s| Value::String(format!("/subscriptions/S/resourceGroups/rg/{s}"))),
    ]
}

/// A raw tool object with a known or unknown type and a few optional keys.
pub fn arb_tool() -> impl Strategy<Value = Value> {
    (
        proptest::sample::select(TOOL_TYPES),
        proptest::collection::btree_map(
            proptest::sample::select(TOOL_KEYS),
            arb_scalar(),
            0..4,
        ),
    )
        .prop_map(|(tool_type, extra)| {
            let mut tool = serde_json::Map::new();
            tool.insert("type".to_string(), json!(tool_type));
            for (key, value) in extra {
                tool.insert(key.to_string(), value);
            }
            Value::Object(tool)
        })
}

/// A tool-resource map mixing nested mappings and scalars.
pub fn arb_tool_resources() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!({})),
        "[a-z0-9]{1,8}".prop_map(|id| json!({"file_search": {"vector_store_ids": [id]}})),
        "[a-z]{1,8}".prop_map(|name| json!({"memory_search": {"memory_store_name": name}})),
        arb_scalar().prop_map(|v| json!({"code_interpreter": v})),
    ]
}

/// A raw agent in the flat or the versioned shape.
pub fn arb_raw_agent() -> impl Strategy<Value = Value> {
    (
        proptest::option::of("[a-z0-9_]{1,10}"),
        proptest::option::of("[A-Za-z ]{1,12}"),
        proptest::option::of("gpt-[0-9a-z]{1,4}"),
        proptest::collection::vec(arb_tool(), 0..5),
        arb_tool_resources(),
        any::<bool>(),
    )
        .prop_map(|(id, name, model, tools, resources, versioned)| {
            let mut agent = serde_json::Map::new();
            if let Some(id) = id {
                agent.insert("id".to_string(), json!(id));
            }
            if let Some(name) = name {
                agent.insert("name".to_string(), json!(name));
            }
            if versioned {
                agent.insert(
                    "versions".to_string(),
                    json!({"latest": {"definition": {
                        "model": model,
                        "tools": tools,
                        "tool_resources": resources
                    }}}),
                );
            } else {
                if let Some(model) = model {
                    agent.insert("model".to_string(), json!(model));
                }
                agent.insert("tools".to_string(), Value::Array(tools));
                agent.insert("resources".to_string(), resources);
            }
            Value::Object(agent)
        })
}

/// A hub-like resource name (DNS label).
pub fn arb_resource_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,15}"
}
