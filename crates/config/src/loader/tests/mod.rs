//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` and `global_test_lock()` to prevent environment
//!   variable pollution across tests.

use std::sync::Mutex;

pub mod validation_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every variable the loader reads, unset. Tests layer their own values on top.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("FOUNDRY_MANAGEMENT_URL", None),
        ("FOUNDRY_MANAGEMENT_TOKEN", None),
        ("FOUNDRY_DATA_PLANE_TOKEN", None),
        ("FOUNDRY_LOOKUP_TIMEOUT", None),
        ("FOUNDRY_LISTING_TIMEOUT", None),
        ("FOUNDRY_AGENT_PAGE_SIZE", None),
        ("PROJECT_ENDPOINT", None),
    ]
}

/// `cleared_env()` with the given overrides applied.
pub fn env_with(
    overrides: &[(&'static str, &'static str)],
) -> Vec<(&'static str, Option<&'static str>)> {
    let mut vars = cleared_env();
    for (key, value) in overrides {
        match vars.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = Some(value),
            None => vars.push((key, Some(value))),
        }
    }
    vars
}
