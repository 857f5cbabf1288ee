//! Test utilities for Backlog MCP tests
//!
//! Tests never talk to a real Backlog space. Instead they start a
//! [`wiremock::MockServer`] and point a configuration at it with
//! [`mock_config`]; everything above the gateway is then exercised unchanged.

use crate::api::BacklogApi;
use crate::config::BacklogConfig;
use crate::mcp::tool_registry::ToolContext;
use serde_json::{Map, Value};
use std::sync::Arc;
use wiremock::MockServer;

/// API key used by every mock configuration
pub const TEST_API_KEY: &str = "test-api-key";

/// Configuration whose base URL is `server`'s `/api/v2`
pub fn mock_config(server: &MockServer) -> BacklogConfig {
    BacklogConfig::new("test-space", TEST_API_KEY)
        .expect("static test credentials are valid")
        .with_base_url(format!("{}/api/v2", server.uri()))
}

/// Tool context backed by `server`
pub fn mock_context(server: &MockServer) -> ToolContext {
    ToolContext::new(Arc::new(BacklogApi::new(&mock_config(server))))
}

/// Unwrap a `json!` object literal into tool arguments
pub fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("tool arguments must be an object, got {other}"),
    }
}
