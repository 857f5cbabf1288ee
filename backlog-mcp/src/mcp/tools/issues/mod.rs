//! Issue management tools for MCP operations
//!
//! This module provides all issue-related tools using the tool registry pattern.
//! Each tool is in its own submodule with dedicated implementation and description.

pub mod add;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all issue-related tools with the registry
pub fn register_issue_tools(registry: &mut ToolRegistry) {
    registry.register_tool(list::GetIssuesTool::new());
    registry.register_tool(get::GetIssueTool::new());
    registry.register_tool(add::AddIssueTool::new());
    registry.register_tool(update::UpdateIssueTool::new());
    registry.register_tool(delete::DeleteIssueTool::new());
}
