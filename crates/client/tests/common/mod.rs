//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for testing the Foundry client against
//! `wiremock` servers.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here use static tokens, never the Azure CLI

#[allow(unused_imports)]
pub use foundry_client::testing::{
    TEST_DATA_PLANE_TOKEN, TEST_MANAGEMENT_TOKEN, load_fixture, static_client,
};

#[allow(unused_imports)]
pub use foundry_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use std::time::Duration;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Subscription used by every management fixture.
#[allow(dead_code)]
pub const SUBSCRIPTION_ID: &str = "sub-1";

/// Id of the `contoso-hub` account in `management/accounts.json`.
#[allow(dead_code)]
pub const CONTOSO_HUB_ID: &str =
    "/subscriptions/sub-1/resourceGroups/rg-ai/providers/Microsoft.CognitiveServices/accounts/contoso-hub";

/// Id of the `legacy-hub` account in `management/accounts.json`.
#[allow(dead_code)]
pub const LEGACY_HUB_ID: &str =
    "/subscriptions/sub-1/resourceGroups/rg-legacy/providers/Microsoft.CognitiveServices/accounts/legacy-hub";

#[allow(dead_code)]
pub const ACCOUNTS_PATH: &str = "/subscriptions/sub-1/providers/Microsoft.CognitiveServices/accounts";

#[allow(dead_code)]
pub const WORKSPACES_PATH: &str =
    "/subscriptions/sub-1/providers/Microsoft.MachineLearningServices/workspaces";

/// Bearer header value the static test management token produces.
#[allow(dead_code)]
pub fn management_bearer() -> String {
    format!("Bearer {}", TEST_MANAGEMENT_TOKEN)
}

/// Bearer header value the static test data-plane token produces.
#[allow(dead_code)]
pub fn data_plane_bearer() -> String {
    format!("Bearer {}", TEST_DATA_PLANE_TOKEN)
}

/// Mount a 200 JSON response for `GET {path}`.
#[allow(dead_code)]
pub async fn mount_json(server: &MockServer, route: &str, body: &serde_json::Value) {
    use wiremock::matchers::{method, path};

    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount an ARM-style error response for `GET {path}`.
#[allow(dead_code)]
pub async fn mount_error(server: &MockServer, route: &str, status: u16) {
    use wiremock::matchers::{method, path};

    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(load_fixture("management/arm_error.json")),
        )
        .mount(server)
        .await;
}

/// Mount the full management fixture set for `sub-1`.
///
/// `contoso-hub` lists two children; `legacy-hub` fails with 404.
#[allow(dead_code)]
pub async fn mount_management_fixtures(server: &MockServer) {
    mount_json(server, ACCOUNTS_PATH, &load_fixture("management/accounts.json")).await;
    mount_json(server, WORKSPACES_PATH, &load_fixture("management/workspaces.json")).await;
    mount_json(
        server,
        &format!("{}/projects", CONTOSO_HUB_ID),
        &load_fixture("management/hub_projects.json"),
    )
    .await;
    mount_error(server, &format!("{}/projects", LEGACY_HUB_ID), 404).await;
}
