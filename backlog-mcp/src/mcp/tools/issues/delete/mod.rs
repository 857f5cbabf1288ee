//! Issue deletion tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::RESULTS_HEADER;
use crate::schema::{ParameterSchema, SchemaKind};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{Map, Value};

/// Tool backing `backlog_delete_issue`
#[derive(Default)]
pub struct DeleteIssueTool;

impl DeleteIssueTool {
    /// Creates a new instance of the DeleteIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteIssueTool {
    fn name(&self) -> &'static str {
        "backlog_delete_issue"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> ParameterSchema {
        SchemaKind::DeleteIssue.schema()
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let params = match BaseToolImpl::validate_arguments(&self.schema(), &arguments) {
            Ok(params) => params,
            Err(response) => return Ok(response),
        };

        tracing::debug!(issue = %params.display_value("issueIdOrKey"), "Deleting issue");
        let result = context.issues.delete_issue(&params).await;
        Ok(BaseToolImpl::create_tool_response(result, RESULTS_HEADER))
    }
}
