//! Backlog tools exposed over MCP
//!
//! Each tool lives in its own submodule with its implementation and a
//! `description.md` that is published as the tool description.

pub mod issues;
pub mod projects;
pub mod wikis;

/// Success header for list and mutation tools
pub const RESULTS_HEADER: &str = "Results for your query";
