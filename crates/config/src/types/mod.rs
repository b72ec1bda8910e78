//! Configuration types for the Foundry graph tools.
//!
//! Responsibilities:
//! - Re-export the connection, auth, and query-default types.
//!
//! Does NOT handle:
//! - Loading values from the environment (see `loader`).

mod auth;
mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig, QueryDefaults};
