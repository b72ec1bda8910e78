//! Envelope types shared by management-plane (ARM) endpoints.

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// ARM collection envelope: `{"value": [...]}`.
///
/// Items that do not match `T` are dropped rather than failing the page.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ArmListResponse<T> {
    #[serde(default, deserialize_with = "crate::serde_helpers::lenient_vec")]
    pub value: Vec<T>,
}

/// ARM error envelope: `{"error": {"code": "...", "message": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArmErrorResponse {
    pub error: ArmErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArmErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ArmErrorResponse {
    /// Human-readable `code: message` summary.
    pub fn summary(&self) -> Option<String> {
        match (&self.error.code, &self.error.message) {
            (Some(code), Some(message)) => Some(format!("{}: {}", code, message)),
            (None, Some(message)) => Some(message.clone()),
            (Some(code), None) => Some(code.clone()),
            (None, None) => None,
        }
    }
}
