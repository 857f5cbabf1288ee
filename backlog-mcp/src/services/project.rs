//! Project operations

use crate::api::BacklogApi;
use crate::error::Result;
use crate::schema::ValidatedParams;
use std::sync::Arc;

/// Read access to projects
#[derive(Debug, Clone)]
pub struct ProjectService {
    api: Arc<BacklogApi>,
}

impl ProjectService {
    /// Create a service backed by `api`
    pub fn new(api: Arc<BacklogApi>) -> Self {
        Self { api }
    }

    /// List projects visible to the API key
    pub async fn get_projects(&self, params: &ValidatedParams) -> Result<String> {
        self.api
            .get_projects(params)
            .await
            .map_err(|e| e.in_operation("get projects"))
    }

    /// Fetch one project by id or key
    pub async fn get_project(&self, params: &ValidatedParams) -> Result<String> {
        self.api
            .get_project(params)
            .await
            .map_err(|e| e.in_operation("get project"))
    }
}
