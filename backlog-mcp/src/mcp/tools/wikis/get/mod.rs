//! Single wiki page lookup tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::schema::{ParameterSchema, SchemaKind};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{Map, Value};

/// Tool backing `backlog_get_wiki`
#[derive(Default)]
pub struct GetWikiTool;

impl GetWikiTool {
    /// Creates a new instance of the GetWikiTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetWikiTool {
    fn name(&self) -> &'static str {
        "backlog_get_wiki"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> ParameterSchema {
        SchemaKind::Wiki.schema()
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

        tracing::debug!(wiki_id = %params.display_value("wikiId"), "Fetching wiki page");
        let result = context.wikis.get_wiki(&params).await;
        Ok(BaseToolImpl::create_tool_response(
            result,
            format!("Wiki details for {}", params.display_value("wikiId")),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::responses::response_text;
    use crate::test_utils::{args, mock_context};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_wiki_details_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/wikis/12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Home"})))
            .mount(&server)
            .await;

        let result = GetWikiTool::new()
            .execute(args(json!({"wikiId": 12})), &mock_context(&server))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert!(response_text(&result).starts_with("Wiki details for 12:\n"));
    }

    #[tokio::test]
    async fn test_string_wiki_id_rejected() {
        let server = MockServer::start().await;

        let result = GetWikiTool::new()
            .execute(args(json!({"wikiId": "12"})), &mock_context(&server))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(response_text(&result).contains("wikiId: Expected integer, received string"));
    }
}
