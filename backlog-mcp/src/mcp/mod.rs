//! Model Context Protocol (MCP) server support
//!
//! This module exposes the Backlog tools through the Model Context Protocol.

// Module declarations
pub mod responses;
pub mod server;
pub mod tool_registry;
pub mod tools;

// Re-export commonly used items from submodules
pub use server::McpServer;
pub use tool_registry::{
    default_registry, register_issue_tools, register_project_tools, register_wiki_tools,
    BaseToolImpl, McpTool, ToolContext, ToolDescriptor, ToolRegistry,
};
