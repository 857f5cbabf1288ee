//! HTTP gateway to the Backlog REST API
//!
//! One [`BacklogApi`] is built at startup and shared by every service. Each
//! endpoint method takes already validated parameters, folds the schema's path
//! identity into the URL and returns the response body pretty-printed.

pub mod encoding;

use crate::config::BacklogConfig;
use crate::error::{BacklogError, Result};
use crate::schema::ValidatedParams;
use reqwest::{header, Method, StatusCode};
use serde_json::Value;

/// Body encoding used for POST and PATCH requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// `application/x-www-form-urlencoded`, what the Backlog API documents
    #[default]
    FormUrlEncoded,
    /// `application/json`
    Json,
}

impl ContentType {
    fn mime(self) -> &'static str {
        match self {
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::Json => "application/json",
        }
    }
}

/// Client for one Backlog space
#[derive(Debug, Clone)]
pub struct BacklogApi {
    base_url: String,
    api_key: String,
    content_type: ContentType,
    http: reqwest::Client,
}

impl BacklogApi {
    /// Create a client from configuration
    pub fn new(config: &BacklogConfig) -> Self {
        Self {
            base_url: config.base_url(),
            api_key: config.api_key.clone(),
            content_type: ContentType::default(),
            http: reqwest::Client::new(),
        }
    }

    /// Use `content_type` for mutation bodies
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /projects`
    pub async fn get_projects(&self, params: &ValidatedParams) -> Result<String> {
        self.request(Method::GET, "projects", params).await
    }

    /// `GET /projects/{projectIdOrKey}`
    pub async fn get_project(&self, params: &ValidatedParams) -> Result<String> {
        self.request(Method::GET, "projects", params).await
    }

    /// `GET /issues`
    pub async fn get_issues(&self, params: &ValidatedParams) -> Result<String> {
        self.request(Method::GET, "issues", params).await
    }

    /// `GET /issues/{issueIdOrKey}`
    pub async fn get_issue(&self, params: &ValidatedParams) -> Result<String> {
        self.request(Method::GET, "issues", params).await
    }

    /// `POST /issues`
    pub async fn add_issue(&self, params: &ValidatedParams) -> Result<String> {
        self.request(Method::POST, "issues", params).await
    }

    /// `PATCH /issues/{issueIdOrKey}`
    pub async fn update_issue(&self, params: &ValidatedParams) -> Result<String> {
        self.request(Method::PATCH, "issues", params).await
    }

    /// `DELETE /issues/{issueIdOrKey}`
    pub async fn delete_issue(&self, params: &ValidatedParams) -> Result<String> {
        self.request(Method::DELETE, "issues", params).await
    }

    /// `GET /wikis`
    pub async fn get_wikis(&self, params: &ValidatedParams) -> Result<String> {
        self.request(Method::GET, "wikis", params).await
    }

    /// `GET /wikis/{wikiId}`
    pub async fn get_wiki(&self, params: &ValidatedParams) -> Result<String> {
        self.request(Method::GET, "wikis", params).await
    }

    /// `POST /wikis`
    pub async fn add_wiki(&self, params: &ValidatedParams) -> Result<String> {
        self.request(Method::POST, "wikis", params).await
    }

    /// `PATCH /wikis/{wikiId}`
    pub async fn update_wiki(&self, params: &ValidatedParams) -> Result<String> {
        self.request(Method::PATCH, "wikis", params).await
    }

    /// `DELETE /wikis/{wikiId}`
    pub async fn delete_wiki(&self, params: &ValidatedParams) -> Result<String> {
        self.request(Method::DELETE, "wikis", params).await
    }

    async fn request(
        &self,
        method: Method,
        resource: &str,
        params: &ValidatedParams,
    ) -> Result<String> {
        let (identity, fields) = params.split_path_identity();
        let mut segments = vec![resource];
        if let Some(identity) = identity.as_deref() {
            segments.push(identity);
        }

        let url = encoding::build_url(&self.base_url, &segments, &self.api_key, &fields)?;
        tracing::debug!(%method, path = url.path(), fields = fields.len(), "Calling Backlog API");

        let mut request = self.http.request(method.clone(), url);
        if method == Method::GET {
            request = request.header(header::ACCEPT, "application/json");
        } else {
            request = request.header(header::CONTENT_TYPE, self.content_type.mime());
        }
        if method == Method::POST || method == Method::PATCH {
            let body = match self.content_type {
                ContentType::FormUrlEncoded => encoding::form_body(&fields),
                ContentType::Json => encoding::json_body(&fields)?,
            };
            request = request.body(body);
        }

        let response = request.send().await.map_err(BacklogError::transport)?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Backlog API returned an error status");
            return Err(status_error(status, response.text().await));
        }

        let data: Value = response.json().await.map_err(BacklogError::transport)?;
        Ok(serde_json::to_string_pretty(&data)?)
    }
}

/// API error for a non-2xx response; a body that could not be read is reported in its place
fn status_error(
    status: StatusCode,
    body: std::result::Result<String, impl std::fmt::Display>,
) -> BacklogError {
    let body = body.unwrap_or_else(|e| format!("(failed to read response body: {e})"));
    BacklogError::api(
        format!(
            "Backlog API responded with status: {} {}\n{}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            body
        ),
        status.as_u16(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaKind;
    use serde_json::{json, Map};
    use url::form_urlencoded;
    use wiremock::matchers::{body_string_contains, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn validated(kind: SchemaKind, value: Value) -> ValidatedParams {
        let Value::Object(map) = value else {
            panic!("expected object");
        };
        kind.schema().validate(&map).unwrap()
    }

    async fn api_for(server: &MockServer) -> BacklogApi {
        let config = BacklogConfig::new("space", "test-key")
            .unwrap()
            .with_base_url(format!("{}/api/v2", server.uri()));
        BacklogApi::new(&config)
    }

    fn query_of(request: &wiremock::Request) -> Vec<(String, String)> {
        request.url.query_pairs().into_owned().collect()
    }

    #[tokio::test]
    async fn test_get_issues_sends_bracketed_ids_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/issues"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let params = validated(SchemaKind::IssueList, json!({"projectId": [1, 2, 3]}));
        let body = api.get_issues(&params).await.unwrap();
        assert_eq!(body, "[]");

        let requests = server.received_requests().await.unwrap();
        let query = query_of(&requests[0]);
        assert_eq!(query[0], ("apiKey".to_string(), "test-key".to_string()));
        let ids: Vec<_> = query
            .iter()
            .filter(|(k, _)| k == "projectId[]")
            .map(|(_, v)| v.clone())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(requests[0].url.query().unwrap().contains("projectId%5B%5D=1"));
    }

    #[tokio::test]
    async fn test_success_is_pretty_printed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/projects/PRJ"))
            .and(query_param("apiKey", "test-key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 1, "projectKey": "PRJ"})),
            )
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let params = validated(SchemaKind::Project, json!({"projectIdOrKey": "PRJ"}));
        let body = api.get_project(&params).await.unwrap();
        assert_eq!(body, "{\n  \"id\": 1,\n  \"projectKey\": \"PRJ\"\n}");

        let requests = server.received_requests().await.unwrap();
        let keys: Vec<_> = query_of(&requests[0]).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["apiKey"]);
    }

    #[tokio::test]
    async fn test_non_success_status_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/issues/PRJ-404"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let params = validated(SchemaKind::Issue, json!({"issueIdOrKey": "PRJ-404"}));
        let err = api.get_issue(&params).await.unwrap_err();
        match err {
            BacklogError::Api { message, status } => {
                assert_eq!(status, Some(404));
                assert_eq!(
                    message,
                    "Backlog API responded with status: 404 Not Found\nnot found"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_has_no_status() {
        let config = BacklogConfig::new("space", "k")
            .unwrap()
            .with_base_url("http://127.0.0.1:1/api/v2");
        let api = BacklogApi::new(&config);
        let params = validated(SchemaKind::ProjectList, json!({}));

        let err = api.get_projects(&params).await.unwrap_err();
        match err {
            BacklogError::Api { message, status } => {
                assert!(status.is_none());
                assert!(message.starts_with("Failed to communicate with Backlog API: "));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_issue_excludes_identity_from_query_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/v2/issues/PRJ-1"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("summary=New+title"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"issueKey": "PRJ-1"})))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let params = validated(
            SchemaKind::UpdateIssue,
            json!({"issueIdOrKey": "PRJ-1", "summary": "New title"}),
        );
        api.update_issue(&params).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let request = &requests[0];
        let query = query_of(request);
        assert!(!query.iter().any(|(k, _)| k == "issueIdOrKey"));
        assert!(query.contains(&("summary".to_string(), "New title".to_string())));

        let body: Vec<(String, String)> = form_urlencoded::parse(&request.body)
            .into_owned()
            .collect();
        assert_eq!(body, vec![("summary".to_string(), "New title".to_string())]);
    }

    #[tokio::test]
    async fn test_add_issue_body_matches_query_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/issues"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 10})))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let params = validated(
            SchemaKind::AddIssue,
            json!({"projectId": 1, "summary": "s", "issueTypeId": 2, "priorityId": 3}),
        );
        api.add_issue(&params).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: Vec<(String, String)> = form_urlencoded::parse(&requests[0].body)
            .into_owned()
            .collect();
        let query: Vec<(String, String)> = query_of(&requests[0]).into_iter().skip(1).collect();
        assert_eq!(body, query);
    }

    #[tokio::test]
    async fn test_json_content_type_sends_object_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/wikis"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 5})))
            .mount(&server)
            .await;

        let api = api_for(&server).await.with_content_type(ContentType::Json);
        let params = validated(
            SchemaKind::AddWiki,
            json!({"projectId": 1, "name": "Home", "content": "hello"}),
        );
        api.add_wiki(&params).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: Map<String, Value> = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["name"], "Home");
        assert_eq!(body["projectId"], 1);
    }

    #[tokio::test]
    async fn test_delete_wiki_sends_mail_notify_in_query_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v2/wikis/42"))
            .and(query_param("mailNotify", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
            .mount(&server)
            .await;

        let api = api_for(&server).await;
        let params = validated(SchemaKind::DeleteWiki, json!({"wikiId": 42, "mailNotify": true}));
        api.delete_wiki(&params).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[test]
    fn test_unreadable_error_body_is_reported() {
        let err = status_error(StatusCode::BAD_GATEWAY, Err("connection reset"));
        assert_eq!(err.status_code(), Some(502));
        assert_eq!(
            err.to_string(),
            "API Error: Backlog API responded with status: 502 Bad Gateway\n\
             (failed to read response body: connection reset)"
        );

        let err = status_error(StatusCode::NOT_FOUND, Ok::<_, String>("gone".to_string()));
        assert_eq!(
            err.to_string(),
            "API Error: Backlog API responded with status: 404 Not Found\ngone"
        );
    }
}
