//! Backlog MCP CLI Library
//!
//! Command-line definitions, logging setup and exit codes for the
//! `backlog-mcp` binary.

// Re-export modules for use in tests
/// Command-line interface definitions and argument parsing
pub mod cli;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Tracing subscriber setup
pub mod logging;
