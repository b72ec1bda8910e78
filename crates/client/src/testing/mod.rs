//! Testing utilities for Foundry client tests.
//!
//! Fixture loading, a ready-made client for mock servers, and proptest
//! strategies for upstream payloads. Available when running tests or when
//! the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use foundry_client::testing::{load_fixture, static_client};
//!
//! let fixture = load_fixture("management/accounts.json");
//! let client = static_client(&mock_server.uri());
//! ```

pub mod generators;

use std::path::Path;
use std::time::Duration;

use secrecy::SecretString;

use crate::auth::Credential;
use crate::client::FoundryClient;

/// Token the static test credential hands out for the management plane.
pub const TEST_MANAGEMENT_TOKEN: &str = "test-management-token";

/// Token the static test credential hands out for the data plane.
pub const TEST_DATA_PLANE_TOKEN: &str = "test-data-plane-token";

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Credential with fixed tokens for both audiences.
pub fn static_credential() -> Credential {
    Credential::Static {
        management: Some(SecretString::new(TEST_MANAGEMENT_TOKEN.to_string().into())),
        data_plane: Some(SecretString::new(TEST_DATA_PLANE_TOKEN.to_string().into())),
    }
}

/// Client whose management plane is `base_url`, with short timeouts.
///
/// # Panics
/// If the client cannot be built.
pub fn static_client(base_url: &str) -> FoundryClient {
    FoundryClient::builder()
        .management_url(base_url.to_string())
        .credential(static_credential())
        .lookup_timeout(Duration::from_secs(2))
        .listing_timeout(Duration::from_secs(2))
        .build()
        .expect("test client should build")
}
