//! Unified error handling for the Backlog MCP library
//!
//! Every layer below the tool handlers returns a [`BacklogError`]. Layers add
//! context by wrapping, never by discarding the inner message, and the tool
//! handlers are the single place where all kinds are rendered for the caller.

use std::fmt;
use thiserror::Error;

/// Status code reported for errors that carry no HTTP status of their own
pub const DEFAULT_ERROR_CODE: u16 = 500;

/// Status code reported for parameter validation failures
pub const VALIDATION_ERROR_CODE: u16 = 400;

/// The main error type for the Backlog MCP library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BacklogError {
    /// A required startup setting is missing or invalid
    #[error("Configuration Error: {0}")]
    Configuration(String),

    /// Tool input did not satisfy its parameter schema
    #[error("Validation Error: {0}")]
    Validation(String),

    /// The Backlog API answered with a non-2xx status, or could not be reached
    #[error("API Error: {message}")]
    Api {
        /// Human readable description, including the response body when present
        message: String,
        /// HTTP status code, absent when no response was received
        status: Option<u16>,
    },

    /// A domain service operation failed
    #[error("Failed to {operation}: {source}")]
    Service {
        /// Operation name, e.g. "get issue"
        operation: &'static str,
        /// The underlying failure
        #[source]
        source: Box<BacklogError>,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl BacklogError {
    /// Create an API error for a response with the given status
    pub fn api(message: impl Into<String>, status: u16) -> Self {
        Self::Api {
            message: message.into(),
            status: Some(status),
        }
    }

    /// Create an API error for a call that never produced a response
    pub fn transport(cause: impl fmt::Display) -> Self {
        Self::Api {
            message: format!("Failed to communicate with Backlog API: {cause}"),
            status: None,
        }
    }

    /// Wrap this error with the name of the service operation that failed
    pub fn in_operation(self, operation: &'static str) -> Self {
        Self::Service {
            operation,
            source: Box::new(self),
        }
    }

    /// Status code associated with this error kind, if it carries one
    ///
    /// Transport failures report [`DEFAULT_ERROR_CODE`] since they are treated
    /// as fatal communication failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Configuration(_) => Some(DEFAULT_ERROR_CODE),
            Self::Validation(_) => Some(VALIDATION_ERROR_CODE),
            Self::Api { status, .. } => Some(status.unwrap_or(DEFAULT_ERROR_CODE)),
            _ => None,
        }
    }

    /// Whether the error is fatal to the process rather than to one request
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Result type alias for Backlog MCP operations
pub type Result<T> = std::result::Result<T, BacklogError>;

/// Render an error the way tool responses present it
///
/// Coded kinds (configuration, validation, API) get a `(Code: n)` suffix;
/// wrapped and generic errors render their message unchanged.
pub fn format_error(error: &BacklogError) -> String {
    match error.status_code() {
        Some(code) => format!("{error} (Code: {code})"),
        None => error.to_string(),
    }
}
