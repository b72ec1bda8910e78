//! Subscription listing model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A subscription as returned by the management plane.
///
/// The well-known fields are lifted out for display; everything else is
/// carried through untouched so the serialized form matches upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(
        rename = "subscriptionId",
        default,
        deserialize_with = "crate::serde_helpers::default_on_invalid"
    )]
    pub subscription_id: Option<String>,
    #[serde(
        rename = "displayName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::default_on_invalid"
    )]
    pub display_name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::default_on_invalid"
    )]
    pub state: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
