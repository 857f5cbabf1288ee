//! Tool registry for MCP operations
//!
//! The registry holds two things keyed by tool name: the published
//! [`ToolDescriptor`] and the [`McpTool`] handler that executes it. Descriptors
//! are kept in registration order so `list_tools` is stable.

use super::responses::{create_error_response, create_success_response};
use crate::api::BacklogApi;
use crate::error::{format_error, BacklogError};
use crate::schema::{to_input_schema, ParameterSchema, ValidatedParams};
use crate::services::{IssueService, ProjectService, WikiService};
use rmcp::model::{CallToolResult, Tool};
use rmcp::Error as McpError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Context shared by all tools during execution
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Project operations
    pub projects: ProjectService,
    /// Issue operations
    pub issues: IssueService,
    /// Wiki page operations
    pub wikis: WikiService,
}

impl ToolContext {
    /// Create a context whose services all share `api`
    pub fn new(api: Arc<BacklogApi>) -> Self {
        Self {
            projects: ProjectService::new(api.clone()),
            issues: IssueService::new(api.clone()),
            wikis: WikiService::new(api),
        }
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Parameter schema the tool validates its arguments against
    fn schema(&self) -> ParameterSchema;

    /// Descriptor published to clients, derived from [`McpTool::schema`]
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::from_schema(self.name(), self.description(), &self.schema())
    }

    /// Execute the tool with the given arguments and context
    ///
    /// Validation and service failures are reported as an error
    /// [`CallToolResult`]; an `Err` means the tool itself could not run.
    async fn execute(
        &self,
        arguments: Map<String, Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Published description of one tool
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Unique tool name
    pub name: String,
    /// Human readable description
    pub description: String,
    /// JSON Schema of the accepted arguments
    pub input_schema: Map<String, Value>,
}

impl ToolDescriptor {
    /// Create a descriptor from its parts
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Map<String, Value>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    /// Create a descriptor whose input schema is rendered from `schema`
    pub fn from_schema(name: &str, description: &str, schema: &ParameterSchema) -> Self {
        Self::new(name, description, to_input_schema(schema))
    }

    /// Convert to the rmcp tool model
    pub fn to_tool(&self) -> Tool {
        Tool::new(
            self.name.clone(),
            self.description.clone(),
            Arc::new(self.input_schema.clone()),
        )
    }
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    descriptors: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
    handlers: HashMap<String, Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, overwriting any previous one with the same name
    ///
    /// An overwritten descriptor keeps its original position in [`Self::list`].
    pub fn register(&mut self, descriptor: ToolDescriptor) {
        match self.index.get(&descriptor.name) {
            Some(&position) => {
                tracing::warn!(tool = %descriptor.name, "Tool already registered, overwriting");
                self.descriptors[position] = descriptor;
            }
            None => {
                self.index.insert(descriptor.name.clone(), self.descriptors.len());
                self.descriptors.push(descriptor);
            }
        }
    }

    /// Register a tool's descriptor together with its handler
    pub fn register_tool<T: McpTool + 'static>(&mut self, tool: T) {
        let descriptor = tool.descriptor();
        self.handlers.insert(descriptor.name.clone(), Arc::new(tool));
        self.register(descriptor);
    }

    /// Whether a descriptor with this name is registered
    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get a descriptor by name
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.index.get(name).map(|&position| &self.descriptors[position])
    }

    /// All descriptors in registration order
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.descriptors
    }

    /// Get the handler for a tool
    pub fn handler(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.handlers.get(name).cloned()
    }

    /// List all registered tool names in registration order
    pub fn list_tool_names(&self) -> Vec<String> {
        self.descriptors.iter().map(|d| d.name.clone()).collect()
    }

    /// Get all registered tools as Tool objects for MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.descriptors.iter().map(ToolDescriptor::to_tool).collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Validate tool arguments against `schema`
    ///
    /// On failure the returned error is the finished tool response, ready to
    /// hand back to the client.
    pub fn validate_arguments(
        schema: &ParameterSchema,
        arguments: &Map<String, Value>,
    ) -> std::result::Result<ValidatedParams, CallToolResult> {
        schema.validate(arguments).map_err(|violations| {
            tracing::debug!(kind = ?schema.kind, %violations, "Rejected tool arguments");
            Self::error_response(&BacklogError::Validation(format!(
                "Invalid parameters: {violations}"
            )))
        })
    }

    /// Turn a service outcome into a tool response
    ///
    /// Success text is prefixed with `header` followed by a newline.
    pub fn create_tool_response(
        result: crate::Result<String>,
        header: impl std::fmt::Display,
    ) -> CallToolResult {
        match result {
            Ok(text) => create_success_response(format!("{header}:\n{text}")),
            Err(error) => {
                tracing::error!(%error, "Backlog operation failed");
                Self::error_response(&error)
            }
        }
    }

    /// Error response for `error`
    pub fn error_response(error: &BacklogError) -> CallToolResult {
        create_error_response(format!("Error: {}", format_error(error)))
    }
}

/// Register all project-related tools with the registry
pub fn register_project_tools(registry: &mut ToolRegistry) {
    use crate::mcp::tools::projects;
    projects::register_project_tools(registry);
}

/// Register all issue-related tools with the registry
pub fn register_issue_tools(registry: &mut ToolRegistry) {
    use crate::mcp::tools::issues;
    issues::register_issue_tools(registry);
}

/// Register all wiki-related tools with the registry
pub fn register_wiki_tools(registry: &mut ToolRegistry) {
    use crate::mcp::tools::wikis;
    wikis::register_wiki_tools(registry);
}

/// Registry populated with the full Backlog tool catalog
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    register_project_tools(&mut registry);
    register_issue_tools(&mut registry);
    register_wiki_tools(&mut registry);
    registry
}
