//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `FOUNDRY_*` and `PROJECT_ENDPOINT` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

pub const ENV_MANAGEMENT_URL: &str = "FOUNDRY_MANAGEMENT_URL";
pub const ENV_MANAGEMENT_TOKEN: &str = "FOUNDRY_MANAGEMENT_TOKEN";
pub const ENV_DATA_PLANE_TOKEN: &str = "FOUNDRY_DATA_PLANE_TOKEN";
pub const ENV_LOOKUP_TIMEOUT: &str = "FOUNDRY_LOOKUP_TIMEOUT";
pub const ENV_LISTING_TIMEOUT: &str = "FOUNDRY_LISTING_TIMEOUT";
pub const ENV_AGENT_PAGE_SIZE: &str = "FOUNDRY_AGENT_PAGE_SIZE";
pub const ENV_PROJECT_ENDPOINT: &str = "PROJECT_ENDPOINT";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_seconds(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a number of seconds".to_string(),
    })?;
    Ok(Duration::from_secs(secs))
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_MANAGEMENT_URL) {
        loader.set_management_url(Some(url));
    }
    if let Some(token) = env_var_or_none(ENV_MANAGEMENT_TOKEN) {
        loader.set_management_token(Some(SecretString::new(token.into())));
    }
    if let Some(token) = env_var_or_none(ENV_DATA_PLANE_TOKEN) {
        loader.set_data_plane_token(Some(SecretString::new(token.into())));
    }
    if let Some(timeout) = env_var_or_none(ENV_LOOKUP_TIMEOUT) {
        loader.set_lookup_timeout(Some(parse_seconds(ENV_LOOKUP_TIMEOUT, &timeout)?));
    }
    if let Some(timeout) = env_var_or_none(ENV_LISTING_TIMEOUT) {
        loader.set_listing_timeout(Some(parse_seconds(ENV_LISTING_TIMEOUT, &timeout)?));
    }
    if let Some(size) = env_var_or_none(ENV_AGENT_PAGE_SIZE) {
        let value: usize = size.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_AGENT_PAGE_SIZE.to_string(),
            message: "must be a positive integer".to_string(),
        })?;
        loader.set_agent_page_size(Some(value));
    }
    if let Some(endpoint) = env_var_or_none(ENV_PROJECT_ENDPOINT) {
        loader.set_project_endpoint(Some(endpoint));
    }
    Ok(())
}
