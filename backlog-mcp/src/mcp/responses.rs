//! Response creation utilities for MCP operations

use rmcp::model::{CallToolResult, Content, RawContent};

/// Create a success response for MCP tool calls
pub fn create_success_response(message: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(message.into())])
}

/// Create an error response for MCP tool calls
pub fn create_error_response(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Concatenated text of every text block in `result`
pub fn response_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|content| match &content.raw {
            RawContent::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
