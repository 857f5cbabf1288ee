//! Single issue lookup tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::schema::{ParameterSchema, SchemaKind};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use rmcp::Error as McpError;
use serde_json::{Map, Value};

/// Tool backing `backlog_get_issue`
#[derive(Default)]
pub struct GetIssueTool;

impl GetIssueTool {
    /// Creates a new instance of the GetIssueTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetIssueTool {
    fn name(&self) -> &'static str {
        "backlog_get_issue"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> ParameterSchema {
        SchemaKind::Issue.schema()
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

        tracing::debug!(issue = %params.display_value("issueIdOrKey"), "Fetching issue");
        let result = context.issues.get_issue(&params).await;
        Ok(BaseToolImpl::create_tool_response(
            result,
            format!("Issue details for {}", params.display_value("issueIdOrKey")),
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
    async fn test_get_issue_prefixes_issue_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/issues/PRJ-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"issueKey": "PRJ-1"})))
            .mount(&server)
            .await;

        let result = GetIssueTool::new()
            .execute(args(json!({"issueIdOrKey": "PRJ-1"})), &mock_context(&server))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            response_text(&result),
            "Issue details for PRJ-1:\n{\n  \"issueKey\": \"PRJ-1\"\n}"
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_validation_error_without_request() {
        let server = MockServer::start().await;

        let result = GetIssueTool::new()
            .execute(Map::new(), &mock_context(&server))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            response_text(&result),
            "Error: Validation Error: Invalid parameters: issueIdOrKey: Required (Code: 400)"
        );
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_not_found_reports_service_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/issues/PRJ-404"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let result = GetIssueTool::new()
            .execute(args(json!({"issueIdOrKey": "PRJ-404"})), &mock_context(&server))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        let text = response_text(&result);
        assert!(text.starts_with("Error: Failed to get issue: API Error: "));
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
        assert!(!text.contains("Validation Error"));
    }
}
