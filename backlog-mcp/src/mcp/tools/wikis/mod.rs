//! Wiki page tools

pub mod add;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all wiki-related tools with the registry
pub fn register_wiki_tools(registry: &mut ToolRegistry) {
    registry.register_tool(list::GetWikisTool::new());
    registry.register_tool(get::GetWikiTool::new());
    registry.register_tool(add::AddWikiTool::new());
    registry.register_tool(update::UpdateWikiTool::new());
    registry.register_tool(delete::DeleteWikiTool::new());
}
