//! Issue operations

use crate::api::BacklogApi;
use crate::error::Result;
use crate::schema::ValidatedParams;
use std::sync::Arc;

/// Read and write access to issues
#[derive(Debug, Clone)]
pub struct IssueService {
    api: Arc<BacklogApi>,
}

impl IssueService {
    /// Create a service backed by `api`
    pub fn new(api: Arc<BacklogApi>) -> Self {
        Self { api }
    }

    /// Search issues
    pub async fn get_issues(&self, params: &ValidatedParams) -> Result<String> {
        self.api
            .get_issues(params)
            .await
            .map_err(|e| e.in_operation("get issues"))
    }

    /// Fetch one issue by id or key
    pub async fn get_issue(&self, params: &ValidatedParams) -> Result<String> {
        self.api
            .get_issue(params)
            .await
            .map_err(|e| e.in_operation("get issue"))
    }

    /// Create an issue
    pub async fn add_issue(&self, params: &ValidatedParams) -> Result<String> {
        self.api
            .add_issue(params)
            .await
            .map_err(|e| e.in_operation("add issue"))
    }

    /// Update an issue
    pub async fn update_issue(&self, params: &ValidatedParams) -> Result<String> {
        self.api
            .update_issue(params)
            .await
            .map_err(|e| e.in_operation("update issue"))
    }

    /// Delete an issue
    pub async fn delete_issue(&self, params: &ValidatedParams) -> Result<String> {
        self.api
            .delete_issue(params)
            .await
            .map_err(|e| e.in_operation("delete issue"))
    }
}
