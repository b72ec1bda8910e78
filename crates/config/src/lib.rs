//! Configuration management for the Foundry graph tools.
//!
//! This crate provides types and loaders for the management-plane connection,
//! credential selection, and query defaults, read from `.env` files and
//! environment variables.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig, QueryDefaults};
