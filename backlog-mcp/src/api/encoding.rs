//! Query string and request body encoding
//!
//! The Backlog API takes multi-value parameters as repeated `name[]` keys, both
//! in the query string and in form bodies.

use crate::error::{BacklogError, Result};
use crate::schema::{ParamValue, ValidatedParams, DOT_SEGMENTS};
use url::form_urlencoded;
use url::Url;

/// Flatten parameters into ordered key/value pairs
///
/// Lists expand into one `name[]` pair per item, in list order.
pub fn encode_pairs(params: &ValidatedParams) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (name, value) in params.iter() {
        match value {
            ParamValue::List(items) => {
                let key = format!("{name}[]");
                pairs.extend(items.iter().map(|item| (key.clone(), item.to_string())));
            }
            scalar => pairs.push((name.to_string(), scalar.to_string())),
        }
    }
    pairs
}

/// `application/x-www-form-urlencoded` body for `params`
pub fn form_body(params: &ValidatedParams) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(encode_pairs(params))
        .finish()
}

/// JSON object body for `params`
pub fn json_body(params: &ValidatedParams) -> Result<String> {
    Ok(serde_json::to_string(&params.to_json_object())?)
}

/// Build the request URL
///
/// `segments` are appended to the base path and percent-encoded individually,
/// so an identity such as `PRJ/1` cannot escape its segment. Empty and dot
/// segments are refused since the URL parser would resolve them away. The API
/// key is always the first query parameter.
pub fn build_url(
    base_url: &str,
    segments: &[&str],
    api_key: &str,
    params: &ValidatedParams,
) -> Result<Url> {
    if let Some(bad) = segments
        .iter()
        .find(|segment| segment.is_empty() || DOT_SEGMENTS.contains(*segment))
    {
        return Err(BacklogError::Validation(format!(
            "Invalid path identity '{bad}'"
        )));
    }

    let mut url = Url::parse(base_url)
        .map_err(|e| BacklogError::Other(format!("Invalid Backlog base URL '{base_url}': {e}")))?;

    url.path_segments_mut()
        .map_err(|()| {
            BacklogError::Other(format!("Backlog base URL '{base_url}' cannot be a base"))
        })?
        .pop_if_empty()
        .extend(segments);

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("apiKey", api_key);
        for (key, value) in encode_pairs(params) {
            query.append_pair(&key, &value);
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaKind;
    use serde_json::{json, Map, Value};

    fn validated(kind: SchemaKind, value: Value) -> ValidatedParams {
        let Value::Object(map) = value else {
            panic!("expected object");
        };
        kind.schema().validate(&map).unwrap()
    }

    #[test]
    fn test_arrays_expand_with_brackets_in_order() {
        let params = validated(SchemaKind::IssueList, json!({"projectId": [1, 2, 3]}));
        let pairs = encode_pairs(&params);
        let ids: Vec<_> = pairs
            .iter()
            .filter(|(k, _)| k == "projectId[]")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(!pairs.iter().any(|(k, _)| k == "projectId"));
    }

    #[test]
    fn test_absent_fields_not_emitted() {
        let params = validated(SchemaKind::IssueList, json!({}));
        let keys: Vec<_> = encode_pairs(&params).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["offset", "count", "order"]);
    }

    #[test]
    fn test_build_url_puts_api_key_first() {
        let params = validated(SchemaKind::IssueList, json!({"keyword": "a b"}));
        let url = build_url("https://space.backlog.com/api/v2", &["issues"], "KEY", &params)
            .unwrap();
        assert_eq!(url.path(), "/api/v2/issues");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("apiKey".to_string(), "KEY".to_string()));
        assert!(pairs.contains(&("keyword".to_string(), "a b".to_string())));
    }

    #[test]
    fn test_build_url_encodes_path_segments() {
        let empty = ValidatedParams::new(SchemaKind::Issue, Vec::new());
        let url = build_url(
            "http://localhost:1234/api/v2/",
            &["issues", "PRJ/1"],
            "k",
            &empty,
        )
        .unwrap();
        assert_eq!(url.path(), "/api/v2/issues/PRJ%2F1");
    }

    #[test]
    fn test_build_url_refuses_empty_and_dot_segments() {
        let empty = ValidatedParams::new(SchemaKind::Issue, Vec::new());
        for identity in ["", ".", ".."] {
            let err = build_url(
                "https://space.backlog.com/api/v2",
                &["issues", identity],
                "K",
                &empty,
            )
            .unwrap_err();
            assert!(
                matches!(err, BacklogError::Validation(_)),
                "{identity:?} produced {err:?}"
            );
        }

        let url = build_url("https://space.backlog.com/api/v2", &["issues", "..."], "K", &empty)
            .unwrap();
        assert_eq!(url.path(), "/api/v2/issues/...");
    }

    #[test]
    fn test_form_body_round_trips_key_set() {
        let params = validated(
            SchemaKind::AddIssue,
            json!({
                "projectId": 1,
                "summary": "Fix login",
                "issueTypeId": 2,
                "priorityId": 3,
                "estimatedHours": 1.5
            }),
        );
        let body = form_body(&params);
        let decoded: Vec<(String, String)> = form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        assert_eq!(decoded, encode_pairs(&params));
        assert!(body.contains("summary=Fix+login"));
    }

    #[test]
    fn test_json_body_is_field_object() {
        let params = validated(
            SchemaKind::AddWiki,
            json!({"projectId": 1, "name": "Home", "content": "hi"}),
        );
        let body: Map<String, Value> = serde_json::from_str(&json_body(&params).unwrap()).unwrap();
        assert_eq!(body["name"], "Home");
        assert_eq!(body.len(), 3);
    }
}
