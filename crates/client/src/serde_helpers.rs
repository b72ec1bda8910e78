//! Serde helpers for the management plane's loosely typed JSON.
//!
//! Responsibilities:
//! - Let upstream models read fields leniently: a field with an unexpected
//!   type degrades to its default instead of failing the whole payload.
//! - Let list payloads drop individual malformed items instead of failing the list.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (which fields a record needs to be usable).
//!
//! Invariants / assumptions:
//! - Upstream API versions disagree on field presence and occasionally on type
//!   (`null` where an object is expected, numbers where strings are expected).
//! - These helpers never fail on well-formed JSON.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize `T`, falling back to `T::default()` if the value has the wrong shape.
pub fn default_on_invalid<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserialize a list, skipping items that do not match `T`.
///
/// A missing, `null`, or non-array value yields an empty list.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        Some(Value::Array(items)) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Deserialize an optional string, treating blank strings and non-strings as absent.
pub fn opt_non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(Some(s)),
        _ => Ok(None),
    }
}
