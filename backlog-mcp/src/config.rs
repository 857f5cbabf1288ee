//! Configuration management for the Backlog MCP server
//!
//! Settings come from environment variables with the `BACKLOG` prefix. The
//! space identifier and API key are mandatory; without them the server must
//! not start.

use crate::common::env_loader::EnvLoader;
use crate::error::{BacklogError, Result};

/// Name reported to MCP clients
pub const SERVER_NAME: &str = "backlog-mcp-server";

/// Version reported to MCP clients
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const ENV_PREFIX: &str = "BACKLOG";
const DEFAULT_DOMAIN: &str = "backlog.com";
const MISSING_CREDENTIALS: &str =
    "BACKLOG_API_KEY or BACKLOG_SPACE_ID environment variable is required";

/// Connection settings for a Backlog space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BacklogConfig {
    /// Space identifier, the subdomain of the Backlog space
    pub space_id: String,
    /// Static API key sent with every request
    pub api_key: String,
    /// Backlog domain hosting the space (default: "backlog.com")
    pub domain: String,
    /// Full API base URL overriding the one derived from space and domain
    pub base_url_override: Option<String>,
}

impl BacklogConfig {
    /// Create a configuration for the given space and key on the default domain
    pub fn new(space_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let config = Self {
            space_id: space_id.into(),
            api_key: api_key.into(),
            domain: DEFAULT_DOMAIN.to_string(),
            base_url_override: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the environment
    ///
    /// Reads `BACKLOG_API_KEY`, `BACKLOG_SPACE_ID`, `BACKLOG_DOMAIN` and
    /// `BACKLOG_BASE_URL`. Missing or blank credentials yield
    /// [`BacklogError::Configuration`].
    pub fn from_env() -> Result<Self> {
        let loader = EnvLoader::new(ENV_PREFIX);

        let config = Self {
            space_id: loader.load_non_empty("SPACE_ID").unwrap_or_default(),
            api_key: loader.load_non_empty("API_KEY").unwrap_or_default(),
            domain: loader.load_string("DOMAIN", DEFAULT_DOMAIN),
            base_url_override: loader.load_non_empty("BASE_URL"),
        };
        config.validate()?;

        tracing::debug!(
            space_id = %config.space_id,
            base_url = %config.base_url(),
            "Loaded Backlog configuration"
        );
        Ok(config)
    }

    /// Use a fixed API base URL instead of the one derived from the space
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// API base URL, e.g. `https://myspace.backlog.com/api/v2`
    pub fn base_url(&self) -> String {
        match &self.base_url_override {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.{}/api/v2", self.space_id, self.domain),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() || self.space_id.trim().is_empty() {
            return Err(BacklogError::Configuration(MISSING_CREDENTIALS.to_string()));
        }
        Ok(())
    }
}
