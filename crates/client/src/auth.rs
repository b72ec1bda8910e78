//! Credential strategies for bearer-token acquisition.
//!
//! Token acquisition itself is an external collaborator; this module only
//! adapts the two supported sources (pre-acquired tokens, Azure CLI) to one
//! `bearer_token(audience)` call.

use secrecy::SecretString;
use tracing::debug;

use crate::error::{ClientError, Result};
use foundry_config::AuthStrategy;
use foundry_config::constants::{DATA_PLANE_AUDIENCE, MANAGEMENT_AUDIENCE};

/// Which upstream plane a token is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenAudience {
    /// Management plane (subscriptions, accounts, workspaces, role assignments).
    Management,
    /// AI-platform data plane (agents).
    DataPlane,
}

impl TokenAudience {
    /// Resource URI to request the token for.
    pub const fn resource(&self) -> &'static str {
        match self {
            TokenAudience::Management => MANAGEMENT_AUDIENCE,
            TokenAudience::DataPlane => DATA_PLANE_AUDIENCE,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenAudience::Management => "management",
            TokenAudience::DataPlane => "data-plane",
        }
    }
}

/// Source of bearer tokens for one logical request.
#[derive(Debug, Clone)]
pub enum Credential {
    /// Pre-acquired tokens, one per audience.
    Static {
        management: Option<SecretString>,
        data_plane: Option<SecretString>,
    },
    /// `az account get-access-token`, invoked per token request.
    AzureCli,
}

impl Credential {
    /// Obtain a bearer token for the given audience.
    pub async fn bearer_token(&self, audience: TokenAudience) -> Result<SecretString> {
        match self {
            Credential::Static {
                management,
                data_plane,
            } => {
                let token = match audience {
                    TokenAudience::Management => management,
                    TokenAudience::DataPlane => data_plane,
                };
                token.clone().ok_or_else(|| {
                    ClientError::CredentialUnavailable(format!(
                        "no static {} token configured",
                        audience.as_str()
                    ))
                })
            }
            Credential::AzureCli => azure_cli_token(audience).await,
        }
    }
}

impl From<&AuthStrategy> for Credential {
    fn from(strategy: &AuthStrategy) -> Self {
        match strategy {
            AuthStrategy::StaticTokens {
                management,
                data_plane,
            } => Credential::Static {
                management: management.clone(),
                data_plane: data_plane.clone(),
            },
            AuthStrategy::AzureCli => Credential::AzureCli,
        }
    }
}

async fn azure_cli_token(audience: TokenAudience) -> Result<SecretString> {
    debug!(audience = audience.as_str(), "Requesting token from Azure CLI");

    let output = tokio::process::Command::new("az")
        .args([
            "account",
            "get-access-token",
            "--resource",
            audience.resource(),
            "--query",
            "accessToken",
            "-o",
            "tsv",
        ])
        .output()
        .await
        .map_err(|e| ClientError::CredentialUnavailable(format!("failed to run az: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ClientError::CredentialUnavailable(format!(
            "az exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(ClientError::CredentialUnavailable(
            "az returned an empty token".to_string(),
        ));
    }

    Ok(SecretString::new(token.into()))
}
