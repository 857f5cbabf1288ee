//! Project listing tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::RESULTS_HEADER;
use crate::schema::{ParameterSchema, SchemaKind};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{Map, Value};

/// Tool backing `backlog_get_projects`
#[derive(Default)]
pub struct GetProjectsTool;

impl GetProjectsTool {
    /// Creates a new instance of the GetProjectsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetProjectsTool {
    fn name(&self) -> &'static str {
        "backlog_get_projects"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> ParameterSchema {
        SchemaKind::ProjectList.schema()
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

        tracing::debug!(fields = params.len(), "Listing projects");
        let result = context.projects.get_projects(&params).await;
        Ok(BaseToolImpl::create_tool_response(result, RESULTS_HEADER))
    }
}
