//! Wiki page update tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::tools::RESULTS_HEADER;
use crate::schema::{ParameterSchema, SchemaKind};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{Map, Value};

/// Tool backing `backlog_update_wiki`
#[derive(Default)]
pub struct UpdateWikiTool;

impl UpdateWikiTool {
    /// Creates a new instance of the UpdateWikiTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for UpdateWikiTool {
    fn name(&self) -> &'static str {
        "backlog_update_wiki"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> ParameterSchema {
        SchemaKind::UpdateWiki.schema()
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

        tracing::debug!(wiki_id = %params.display_value("wikiId"), "Updating wiki page");
        let result = context.wikis.update_wiki(&params).await;
        Ok(BaseToolImpl::create_tool_response(result, RESULTS_HEADER))
    }
}
