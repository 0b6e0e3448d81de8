//! Configuration management for the GearTracker TUI.
//!
//! This crate provides types and loaders for the connection and table
//! settings shared by the client and TUI crates.

pub mod constants;
mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{env_var_or_none, load_config, load_dotenv};
pub use types::{Config, ConnectionConfig, TableDefaults, normalize_base_url};
