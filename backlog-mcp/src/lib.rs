//! # Backlog MCP
//!
//! Model Context Protocol tools for the [Backlog](https://backlog.com) issue
//! tracker.
//!
//! ## Features
//!
//! - **Projects**: list projects and look one up by id or key
//! - **Issues**: search, fetch, create, update and delete issues
//! - **Wikis**: list, fetch, create, update and delete wiki pages
//! - **Schema-driven**: one declaration per tool drives both argument
//!   validation and the published JSON input schema
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use backlog_mcp::{BacklogConfig, McpServer};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BacklogConfig::from_env()?;
//! let server = McpServer::new(&config);
//!
//! let args = serde_json::json!({ "issueIdOrKey": "PROJ-1" });
//! let result = server
//!     .dispatch("backlog_get_issue", args.as_object().cloned())
//!     .await?;
//! println!("{:?}", result.content);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// HTTP gateway to the Backlog REST API
pub mod api;

/// Shared helpers
pub mod common;

/// Environment configuration
pub mod config;

/// Error taxonomy and rendering
pub mod error;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Tool parameter schemas
pub mod schema;

/// Domain services for projects, issues and wikis
pub mod services;

// Re-export core types
pub use api::{BacklogApi, ContentType};
pub use config::{BacklogConfig, SERVER_NAME, SERVER_VERSION};
pub use error::{format_error, BacklogError, Result};
pub use mcp::{McpServer, ToolDescriptor, ToolRegistry};
pub use schema::{ParameterSchema, SchemaKind, ValidatedParams};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BacklogApi, BacklogConfig, BacklogError, McpServer, ParameterSchema, Result, SchemaKind,
        ToolDescriptor, ToolRegistry, ValidatedParams,
    };
    pub use crate::mcp::{McpTool, ToolContext};
}

#[cfg(test)]
mod test_utils;
