//! Domain services
//!
//! Thin per-domain facades over [`BacklogApi`](crate::api::BacklogApi). They
//! own no state beyond the shared gateway; their job is to name the operation
//! that failed so callers see e.g. `Failed to get issue: ...`.

pub mod issue;
pub mod project;
pub mod wiki;

pub use issue::IssueService;
pub use project::ProjectService;
pub use wiki::WikiService;
