//! Agent payload normalization.
//!
//! Responsibilities:
//! - Turn one raw agent record of any API version into an [`AgentNode`].
//! - Resolve each tool's human-readable `connection` through an ordered rule table.
//! - Flatten the tool-resource map into [`Resource`] entries.
//!
//! Does NOT handle:
//! - Fetching agents or annotating access (see [`crate::FoundryGraphService`]).
//!
//! Invariants:
//! - Parsing is pure and total: any JSON value yields a node, absent or
//!   oddly typed fields fall back to documented defaults.
//! - Field fallbacks use "truthiness": `null`, `false`, `0`, `""`, `[]` and
//!   `{}` count as absent.
//! - Key iteration follows upstream document order.

use serde_json::{Map, Value};

use crate::models::{AgentNode, Resource, Tool};

const DEFAULT_NAME: &str = "Unknown Agent";
const DEFAULT_ID: &str = "unknown";
const DEFAULT_MODEL: &str = "Unknown Model";
const DEFAULT_TOOL_TYPE: &str = "unknown";

/// Marker that identifies a management-plane resource path inside a tool value.
const RESOURCE_PATH_MARKER: &str = "/subscriptions/";

/// Tool keys already interpreted by the generic or type-specific rules.
const CONSUMED_TOOL_KEYS: &[&str] = &[
    "type",
    "name",
    "connection_id",
    "server_label",
    "server_url",
    "project_connection_id",
];

/// Where an agent's effective fields come from.
enum AgentDefinition<'a> {
    /// `versions.latest.definition` is present; it takes precedence over the
    /// top-level fields.
    Versioned {
        agent: &'a Map<String, Value>,
        definition: &'a Map<String, Value>,
    },
    /// Older shape: the agent record is its own definition.
    Flat(&'a Map<String, Value>),
}

impl<'a> AgentDefinition<'a> {
    fn resolve(agent: &'a Map<String, Value>) -> Self {
        let definition = agent
            .get("versions")
            .and_then(|v| v.get("latest"))
            .and_then(|v| v.get("definition"))
            .and_then(Value::as_object);

        match definition {
            Some(definition) => AgentDefinition::Versioned { agent, definition },
            None => AgentDefinition::Flat(agent),
        }
    }

    fn agent(&self) -> &'a Map<String, Value> {
        match self {
            AgentDefinition::Versioned { agent, .. } | AgentDefinition::Flat(agent) => agent,
        }
    }

    fn definition(&self) -> &'a Map<String, Value> {
        match self {
            AgentDefinition::Versioned { definition, .. } => definition,
            AgentDefinition::Flat(agent) => agent,
        }
    }

    /// `definition[key]` if truthy, else `agent[fallback_key]` if truthy.
    fn field(&self, key: &str, fallback_key: &str) -> Option<&'a Value> {
        truthy(self.definition().get(key)).or_else(|| truthy(self.agent().get(fallback_key)))
    }

    fn model(&self) -> String {
        self.field("model", "model")
            .map(render)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    fn tools(&self) -> &'a [Value] {
        self.field("tools", "tools")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn tool_resources(&self) -> Option<&'a Map<String, Value>> {
        self.field("tool_resources", "resources")
            .and_then(Value::as_object)
    }
}

/// Inputs visible to a connection rule.
struct ToolContext<'a> {
    tool: &'a Map<String, Value>,
    tool_type: &'a str,
    tool_resources: &'a Map<String, Value>,
}

enum TypeMatch {
    Exact(&'static str),
    ContainsAny(&'static [&'static str]),
}

impl TypeMatch {
    fn matches(&self, tool_type: &str) -> bool {
        match self {
            TypeMatch::Exact(expected) => tool_type == *expected,
            TypeMatch::ContainsAny(needles) => needles.iter().any(|n| tool_type.contains(*n)),
        }
    }
}

/// A matching rule owns the tool even if it resolves nothing; `None` leaves
/// the connection as the generic step set it.
struct ConnectionRule {
    matcher: TypeMatch,
    resolve: fn(&ToolContext<'_>) -> Option<String>,
}

/// Groups run in order and independently of each other. Within a group the
/// first matching rule wins.
const CONNECTION_RULES: &[&[ConnectionRule]] = &[
    &[
        ConnectionRule {
            matcher: TypeMatch::Exact("mcp"),
            resolve: mcp_connection,
        },
        ConnectionRule {
            matcher: TypeMatch::Exact("file_search"),
            resolve: vector_store_connection,
        },
        ConnectionRule {
            matcher: TypeMatch::ContainsAny(&["memory", "search"]),
            resolve: memory_store_connection,
        },
    ],
    // Search index tools also match "search" above; this group may overwrite it.
    &[ConnectionRule {
        matcher: TypeMatch::ContainsAny(&["azure_ai_search", "cognitive_search"]),
        resolve: index_connection,
    }],
];

fn mcp_connection(ctx: &ToolContext<'_>) -> Option<String> {
    ["server_label", "project_connection_id", "server_url"]
        .iter()
        .find_map(|key| present(ctx.tool.get(*key)))
        .map(render)
}

fn vector_store_connection(ctx: &ToolContext<'_>) -> Option<String> {
    ctx.tool_resources
        .get("file_search")
        .and_then(|fs| fs.get("vector_store_ids"))
        .and_then(Value::as_array)
        .and_then(|ids| ids.first())
        .map(|id| format!("VS: {}", render(id)))
}

fn memory_store_connection(ctx: &ToolContext<'_>) -> Option<String> {
    if let Some(name) = present(ctx.tool.get("memory_store_name")) {
        return Some(render(name));
    }

    let by_type = truthy(ctx.tool_resources.get(ctx.tool_type));
    let store = by_type.or_else(|| ctx.tool_resources.get("memory_search"));

    store
        .and_then(Value::as_object)
        .and_then(|store| present(store.get("memory_store_name")))
        .map(render)
}

fn index_connection(ctx: &ToolContext<'_>) -> Option<String> {
    present(ctx.tool.get("index_name")).map(|index| format!("Index: {}", render(index)))
}

/// Normalizes raw agent payloads into graph nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgentGraphParser;

impl AgentGraphParser {
    /// Parse one raw agent. Never fails.
    ///
    /// `access_count` is 0 and `project_id` is `None`; the caller fills them in.
    pub fn parse(raw: &Value) -> AgentNode {
        let empty = Map::new();
        let agent = raw.as_object().unwrap_or(&empty);
        let source = AgentDefinition::resolve(agent);
        let tool_resources = source.tool_resources().unwrap_or(&empty);

        let tools = source
            .tools()
            .iter()
            .filter_map(Value::as_object)
            .map(|tool| parse_tool(tool, tool_resources))
            .collect();

        AgentNode {
            id: string_or(agent.get("id"), DEFAULT_ID),
            name: string_or(agent.get("name"), DEFAULT_NAME),
            model: source.model(),
            tools,
            resources: flatten_resources(tool_resources),
            access_count: 0,
            project_id: None,
        }
    }
}

fn parse_tool(tool: &Map<String, Value>, tool_resources: &Map<String, Value>) -> Tool {
    let tool_type = tool
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_TOOL_TYPE);

    let mut parsed = Tool {
        tool_type: tool_type.to_string(),
        name: present(tool.get("name")).map(render),
        connection: tool
            .get("connection_id")
            .and_then(Value::as_str)
            .map(|id| last_path_segment(id).to_string()),
        resource_id: None,
    };

    let ctx = ToolContext {
        tool,
        tool_type,
        tool_resources,
    };

    for group in CONNECTION_RULES {
        if let Some(rule) = group.iter().find(|rule| rule.matcher.matches(tool_type)) {
            if let Some(connection) = (rule.resolve)(&ctx) {
                parsed.connection = Some(connection);
            }
        }
    }

    // Last matching key wins.
    for (key, value) in tool {
        if CONSUMED_TOOL_KEYS.contains(&key.as_str()) {
            continue;
        }
        if let Some(path) = value.as_str().filter(|s| s.contains(RESOURCE_PATH_MARKER)) {
            parsed.resource_id = Some(last_path_segment(path).to_string());
        }
    }

    parsed
}

fn flatten_resources(tool_resources: &Map<String, Value>) -> Vec<Resource> {
    let mut resources = Vec::new();
    for (key, value) in tool_resources {
        match value {
            Value::Object(entries) => {
                resources.extend(entries.iter().map(|(sub_key, sub_value)| Resource {
                    resource_type: key.clone(),
                    detail: format!("{}: {}", sub_key, render(sub_value)),
                }));
            }
            other => resources.push(Resource {
                resource_type: key.clone(),
                detail: render(other),
            }),
        }
    }
    resources
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Strings verbatim, everything else as compact JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn string_or(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn truthy(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}
