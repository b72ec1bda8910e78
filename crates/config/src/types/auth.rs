//! Authentication types for Foundry graph configuration.
//!
//! Responsibilities:
//! - Define how bearer tokens are obtained (pre-acquired or Azure CLI).
//!
//! Does NOT handle:
//! - Running the token acquisition itself (see the client crate's `auth` module).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;

/// Strategy for obtaining bearer tokens.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Pre-acquired tokens, one per audience. Either may be absent; a query
    /// that needs the missing audience degrades to an empty result.
    StaticTokens {
        management: Option<SecretString>,
        data_plane: Option<SecretString>,
    },
    /// Ask the Azure CLI for a token per audience on demand.
    AzureCli,
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub strategy: AuthStrategy,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            strategy: AuthStrategy::AzureCli,
        }
    }
}
