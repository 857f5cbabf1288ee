//! Wiki page operations

use crate::api::BacklogApi;
use crate::error::Result;
use crate::schema::ValidatedParams;
use std::sync::Arc;

/// Read and write access to wiki pages
#[derive(Debug, Clone)]
pub struct WikiService {
    api: Arc<BacklogApi>,
}

impl WikiService {
    /// Create a service backed by `api`
    pub fn new(api: Arc<BacklogApi>) -> Self {
        Self { api }
    }

    /// List wiki pages of a project
    pub async fn get_wikis(&self, params: &ValidatedParams) -> Result<String> {
        self.api
            .get_wikis(params)
            .await
            .map_err(|e| e.in_operation("get wikis"))
    }

    /// Fetch one wiki page
    pub async fn get_wiki(&self, params: &ValidatedParams) -> Result<String> {
        self.api
            .get_wiki(params)
            .await
            .map_err(|e| e.in_operation("get wiki"))
    }

    /// Create a wiki page
    pub async fn add_wiki(&self, params: &ValidatedParams) -> Result<String> {
        self.api
            .add_wiki(params)
            .await
            .map_err(|e| e.in_operation("add wiki"))
    }

    /// Rename or rewrite a wiki page
    pub async fn update_wiki(&self, params: &ValidatedParams) -> Result<String> {
        self.api
            .update_wiki(params)
            .await
            .map_err(|e| e.in_operation("update wiki"))
    }

    /// Delete a wiki page
    pub async fn delete_wiki(&self, params: &ValidatedParams) -> Result<String> {
        self.api
            .delete_wiki(params)
            .await
            .map_err(|e| e.in_operation("delete wiki"))
    }
}
