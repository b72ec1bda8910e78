//! Centralized constants for the Foundry graph workspace.
//!
//! Upstream API versions, audiences and timeout defaults live here so the
//! client and CLI crates agree on them.

// =============================================================================
// Upstream Hosts & Audiences
// =============================================================================

/// Default management-plane base URL.
pub const DEFAULT_MANAGEMENT_URL: &str = "https://management.azure.com";

/// Token audience for management-plane calls.
pub const MANAGEMENT_AUDIENCE: &str = "https://management.azure.com";

/// Token audience for AI-platform data-plane calls (agents).
pub const DATA_PLANE_AUDIENCE: &str = "https://ai.azure.com";

/// Host suffix used to build project endpoints from a hub name.
pub const SERVICES_HOST_SUFFIX: &str = "services.ai.azure.com";

/// Host suffix used for workspace endpoints with no hub and no discovery URL.
pub const AZUREML_HOST_SUFFIX: &str = "api.azureml.ms";

/// Resource type reported on every hub.
pub const HUB_RESOURCE_TYPE: &str = "Microsoft.CognitiveServices/accounts";

// =============================================================================
// API Versions
// =============================================================================

pub const SUBSCRIPTIONS_API_VERSION: &str = "2022-12-01";

/// Version that returns `defaultProject` on cognitive-services accounts.
pub const ACCOUNTS_API_VERSION: &str = "2025-06-01";

pub const WORKSPACES_API_VERSION: &str = "2023-08-01-preview";

pub const HUB_PROJECTS_API_VERSION: &str = "2024-10-01";

pub const ROLE_ASSIGNMENTS_API_VERSION: &str = "2022-04-01";

pub const AGENTS_API_VERSION: &str = "2025-11-15-preview";

// =============================================================================
// Timeout Defaults
// =============================================================================

/// Timeout for lightweight lookups (subscriptions, role assignments,
/// hub children, agent detail).
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Timeout for listing calls (accounts, workspaces, agent list).
pub const DEFAULT_LISTING_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Query Defaults
// =============================================================================

/// Page size requested from the agent listing endpoint.
pub const DEFAULT_AGENT_PAGE_SIZE: usize = 100;

/// Upper bound accepted by the agent listing endpoint.
pub const MAX_AGENT_PAGE_SIZE: usize = 100;
