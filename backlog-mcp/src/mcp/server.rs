//! MCP server exposing the Backlog tool catalog

use super::responses::create_error_response;
use super::tool_registry::{default_registry, ToolContext, ToolRegistry};
use crate::api::BacklogApi;
use crate::config::{BacklogConfig, SERVER_NAME, SERVER_VERSION};
use futures_util::FutureExt;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use serde_json::{Map, Value};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

const INSTRUCTIONS: &str = "Tools for the Backlog issue tracker. Use backlog_get_projects and \
backlog_get_project to explore projects, backlog_*_issue(s) to search and manage issues, and \
backlog_*_wiki(s) to read and edit wiki pages. Results are returned as the JSON the Backlog API \
produced.";

/// MCP server for the Backlog tools
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    /// Tool context containing shared state for tool execution
    pub tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a server for the space described by `config`
    ///
    /// Registers the full tool catalog; all tools share one API client.
    pub fn new(config: &BacklogConfig) -> Self {
        let api = Arc::new(BacklogApi::new(config));
        tracing::debug!(base_url = api.base_url(), "Creating Backlog MCP server");
        Self::with_registry(default_registry(), ToolContext::new(api))
    }

    /// Create a server from an already populated registry
    pub fn with_registry(registry: ToolRegistry, context: ToolContext) -> Self {
        Self {
            tool_registry: Arc::new(registry),
            tool_context: Arc::new(context),
        }
    }

    /// The tool registry this server dispatches through
    pub fn registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Run one tool call
    ///
    /// Missing `arguments` is a protocol error. Every other failure, including
    /// an unknown tool name or a panicking handler, becomes an error response
    /// so one bad request never takes the server down.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<Map<String, Value>>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let Some(arguments) = arguments else {
            return Err(McpError::invalid_params("No arguments provided", None));
        };

        if !self.tool_registry.has(name) {
            tracing::warn!(tool = name, "Unknown tool requested");
            return Ok(create_error_response(format!("Unknown tool: {name}")));
        }

        let Some(handler) = self.tool_registry.handler(name) else {
            tracing::error!(tool = name, "Tool registered without a handler");
            return Ok(create_error_response(format!(
                "No handler defined for tool: {name}"
            )));
        };

        tracing::debug!(tool = name, "Dispatching tool call");
        let outcome = AssertUnwindSafe(handler.execute(arguments, &self.tool_context))
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(result)) => {
                if result.is_error != Some(true) {
                    tracing::info!(tool = name, "Tool call completed");
                }
                Ok(result)
            }
            Ok(Err(error)) => {
                tracing::error!(tool = name, %error, "Tool execution failed");
                Ok(create_error_response(format!("Server error: {}", error.message)))
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                tracing::error!(tool = name, panic = %message, "Tool handler panicked");
                Ok(create_error_response(format!("Server error: {message}")))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "tool handler panicked".to_string()
    }
}

impl ServerHandler for McpServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.dispatch(&request.name, request.arguments).await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: SERVER_VERSION.into(),
            },
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::responses::{create_success_response, response_text};
    use crate::mcp::tool_registry::{McpTool, ToolDescriptor};
    use crate::schema::{ParameterSchema, SchemaKind};
    use crate::test_utils::{args, mock_context};
    use serde_json::json;
    use wiremock::MockServer;

    struct PanickingTool;

    #[async_trait::async_trait]
    impl McpTool for PanickingTool {
        fn name(&self) -> &'static str {
            "explode"
        }

        fn description(&self) -> &'static str {
            "Always panics"
        }

        fn schema(&self) -> ParameterSchema {
            SchemaKind::ProjectList.schema()
        }

        async fn execute(
            &self,
            _arguments: Map<String, Value>,
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            panic!("kaboom")
        }
    }

    struct FailingTool;

    #[async_trait::async_trait]
    impl McpTool for FailingTool {
        fn name(&self) -> &'static str {
            "fail"
        }

        fn description(&self) -> &'static str {
            "Returns an MCP error"
        }

        fn schema(&self) -> ParameterSchema {
            SchemaKind::ProjectList.schema()
        }

        async fn execute(
            &self,
            _arguments: Map<String, Value>,
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            Err(McpError::internal_error("backend exploded", None))
        }
    }

    struct EchoTool;

    #[async_trait::async_trait]
    impl McpTool for EchoTool {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn description(&self) -> &'static str {
            "Echoes argument count"
        }

        fn schema(&self) -> ParameterSchema {
            SchemaKind::ProjectList.schema()
        }

        async fn execute(
            &self,
            arguments: Map<String, Value>,
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            Ok(create_success_response(format!("{} args", arguments.len())))
        }
    }

    async fn test_server() -> (McpServer, MockServer) {
        let mock = MockServer::start().await;
        let mut registry = ToolRegistry::new();
        registry.register_tool(PanickingTool);
        registry.register_tool(FailingTool);
        registry.register_tool(EchoTool);
        registry.register(ToolDescriptor::new("orphan", "No handler", Map::new()));
        let server = McpServer::with_registry(registry, mock_context(&mock));
        (server, mock)
    }

    #[tokio::test]
    async fn test_missing_arguments_is_protocol_error() {
        let (server, _mock) = test_server().await;
        let err = server.dispatch("echo", None).await.unwrap_err();
        assert_eq!(err.message, "No arguments provided");
    }

    #[tokio::test]
    async fn test_empty_arguments_are_allowed() {
        let (server, _mock) = test_server().await;
        let result = server.dispatch("echo", Some(Map::new())).await.unwrap();
        assert_eq!(response_text(&result), "0 args");
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let (server, _mock) = test_server().await;
        let result = server
            .dispatch("backlog_nope", Some(Map::new()))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(response_text(&result), "Unknown tool: backlog_nope");
    }

    #[tokio::test]
    async fn test_registered_without_handler() {
        let (server, _mock) = test_server().await;
        let result = server.dispatch("orphan", Some(Map::new())).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(response_text(&result), "No handler defined for tool: orphan");
    }

    #[tokio::test]
    async fn test_panicking_handler_is_contained() {
        let (server, _mock) = test_server().await;
        let result = server.dispatch("explode", Some(Map::new())).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(response_text(&result), "Server error: kaboom");

        // still serving afterwards
        let result = server
            .dispatch("echo", Some(args(json!({"all": true}))))
            .await
            .unwrap();
        assert_eq!(response_text(&result), "1 args");
    }

    #[tokio::test]
    async fn test_handler_error_becomes_server_error() {
        let (server, _mock) = test_server().await;
        let result = server.dispatch("fail", Some(Map::new())).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(response_text(&result), "Server error: backend exploded");
    }

    #[tokio::test]
    async fn test_server_info() {
        let (server, _mock) = test_server().await;
        let info = server.get_info();
        assert_eq!(info.server_info.name, "backlog-mcp-server");
        assert_eq!(info.server_info.version, SERVER_VERSION);
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_new_registers_catalog() {
        let config = BacklogConfig::new("space", "key").unwrap();
        let server = McpServer::new(&config);
        assert_eq!(server.registry().len(), 12);
        assert!(server.registry().has("backlog_delete_wiki"));
    }
}
