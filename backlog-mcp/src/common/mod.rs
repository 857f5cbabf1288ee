//! Common utilities module

/// Environment variable loading utilities
pub mod env_loader;

pub use env_loader::{load_env_non_empty, load_env_string, EnvLoader};
