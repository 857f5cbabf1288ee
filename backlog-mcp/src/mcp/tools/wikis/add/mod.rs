//! Wiki page creation tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::RESULTS_HEADER;
use crate::schema::{ParameterSchema, SchemaKind};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{Map, Value};

/// Tool backing `backlog_add_wiki`
#[derive(Default)]
pub struct AddWikiTool;

impl AddWikiTool {
    /// Creates a new instance of the AddWikiTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AddWikiTool {
    fn name(&self) -> &'static str {
        "backlog_add_wiki"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> ParameterSchema {
        SchemaKind::AddWiki.schema()
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

        tracing::debug!(fields = params.len(), "Creating wiki page");
        let result = context.wikis.add_wiki(&params).await;
        Ok(BaseToolImpl::create_tool_response(result, RESULTS_HEADER))
    }
}
