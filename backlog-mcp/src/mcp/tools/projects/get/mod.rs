//! Single project lookup tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::schema::{ParameterSchema, SchemaKind};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{Map, Value};

/// Tool backing `backlog_get_project`
#[derive(Default)]
pub struct GetProjectTool;

impl GetProjectTool {
    /// Creates a new instance of the GetProjectTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetProjectTool {
    fn name(&self) -> &'static str {
        "backlog_get_project"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> ParameterSchema {
        SchemaKind::Project.schema()
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

        tracing::debug!(project = %params.display_value("projectIdOrKey"), "Fetching project");
        let result = context.projects.get_project(&params).await;
        Ok(BaseToolImpl::create_tool_response(
            result,
            format!("Project details for {}", params.display_value("projectIdOrKey")),
        ))
    }
}
