//! Shared test utilities for foundry-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure every test runs with static tokens, never the Azure CLI.
//!
//! Invariants / Assumptions:
//! - Host configuration variables are cleared for every command.

use assert_cmd::Command;

#[allow(unused_imports)]
pub use foundry_client::testing::{TEST_DATA_PLANE_TOKEN, TEST_MANAGEMENT_TOKEN, load_fixture};

/// Returns a hermetic `foundry-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Both static tokens are set so no credential process is spawned.
/// - Other configuration variables are cleared to ensure no leakage from the host.
pub fn foundry_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("foundry-cli");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("FOUNDRY_MANAGEMENT_TOKEN", TEST_MANAGEMENT_TOKEN)
        .env("FOUNDRY_DATA_PLANE_TOKEN", TEST_DATA_PLANE_TOKEN);

    cmd.env_remove("FOUNDRY_MANAGEMENT_URL")
        .env_remove("FOUNDRY_LOOKUP_TIMEOUT")
        .env_remove("FOUNDRY_LISTING_TIMEOUT")
        .env_remove("FOUNDRY_AGENT_PAGE_SIZE")
        .env_remove("FOUNDRY_OTLP_ENDPOINT")
        .env_remove("PROJECT_ENDPOINT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `foundry-cli` command pointed at a mock management plane.
#[allow(dead_code)]
pub fn foundry_cmd_with_management_url(management_url: &str) -> Command {
    let mut cmd = foundry_cmd();
    cmd.env("FOUNDRY_MANAGEMENT_URL", management_url);
    cmd
}
