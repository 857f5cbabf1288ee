//! Reusable field groups
//!
//! Schemas are composed from these groups the same way the list endpoints of
//! the Backlog API share their filter parameters.

use super::{FieldSpec, FieldType, ParamValue};

/// Default page size for list queries
pub const DEFAULT_COUNT: i64 = 10;

/// Largest page size the API accepts
pub const MAX_COUNT: i64 = 100;

/// Attributes the issue list can be sorted by
pub const SORT_ATTRIBUTES: &[&str] = &[
    "issueType",
    "category",
    "version",
    "milestone",
    "summary",
    "status",
    "priority",
    "attachment",
    "sharedFile",
    "created",
    "createdUser",
    "updated",
    "updatedUser",
    "assignee",
    "startDate",
    "dueDate",
    "estimatedHours",
    "actualHours",
    "childIssue",
];

/// Accepted sort orders
pub const SORT_ORDERS: &[&str] = &["asc", "desc"];

/// `offset` and `count`
pub fn pagination() -> Vec<FieldSpec> {
    vec![
        FieldSpec::optional(
            "offset",
            FieldType::integer_range(Some(0), None),
            "Offset for pagination",
        )
        .with_default(ParamValue::Integer(0)),
        FieldSpec::optional(
            "count",
            FieldType::integer_range(Some(1), Some(MAX_COUNT)),
            "Number of results (1-100, default 10)",
        )
        .with_default(ParamValue::Integer(DEFAULT_COUNT)),
    ]
}

/// Created/updated/start/due date windows
pub fn date_range() -> Vec<FieldSpec> {
    [
        ("createdSince", "Start date of created date (YYYY-MM-DD format)"),
        ("createdUntil", "End date of created date (YYYY-MM-DD format)"),
        ("updatedSince", "Start date of updated date (YYYY-MM-DD format)"),
        ("updatedUntil", "End date of updated date (YYYY-MM-DD format)"),
        ("startDateSince", "Start date of start date (YYYY-MM-DD format)"),
        ("startDateUntil", "End date of start date (YYYY-MM-DD format)"),
        ("dueDateSince", "Start date of due date (YYYY-MM-DD format)"),
        ("dueDateUntil", "End date of due date (YYYY-MM-DD format)"),
    ]
    .into_iter()
    .map(|(name, description)| FieldSpec::optional(name, FieldType::String, description))
    .collect()
}

/// Multi-value id filters, each sent as repeated `name[]` parameters
pub fn entity_ids() -> Vec<FieldSpec> {
    [
        ("projectId", "Project ids"),
        ("issueTypeId", "Issue type ids"),
        ("categoryId", "Category ids"),
        ("versionId", "Version ids"),
        ("milestoneId", "Milestone ids"),
        ("statusId", "Status ids"),
        ("priorityId", "Priority ids"),
        ("assigneeId", "Assignee ids"),
        ("createdUserId", "Created user ids"),
        ("resolutionId", "Reason of done ids"),
        ("id", "Issue ids"),
        ("parentIssueId", "Parent issue ids"),
    ]
    .into_iter()
    .map(|(name, description)| FieldSpec::optional(name, FieldType::integer_array(), description))
    .collect()
}

/// Parent/child, attachment and shared file conditions
pub fn conditions() -> Vec<FieldSpec> {
    vec![
        FieldSpec::optional(
            "parentChild",
            FieldType::integer_range(Some(0), Some(4)),
            "Condition of parent child issue. 0: All, 1: Exclude child issue, 2: Only child issue, \
             3: Neither parent nor child issue, 4: Only parent issue",
        ),
        FieldSpec::optional(
            "attachment",
            FieldType::Boolean,
            "Condition of attachment. true: With attachment, false: Without attachment",
        ),
        FieldSpec::optional(
            "sharedFile",
            FieldType::Boolean,
            "Condition of shared file. true: With shared file, false: Without shared file",
        ),
    ]
}

/// `sort` and `order`
pub fn sorting() -> Vec<FieldSpec> {
    vec![
        FieldSpec::optional(
            "sort",
            FieldType::StringEnum(SORT_ATTRIBUTES),
            "Attribute name for sorting",
        ),
        FieldSpec::optional("order", FieldType::StringEnum(SORT_ORDERS), "Sort order")
            .with_default(ParamValue::Text("desc".to_string())),
    ]
}

/// Free-text `keyword`
pub fn keyword() -> Vec<FieldSpec> {
    vec![FieldSpec::optional(
        "keyword",
        FieldType::String,
        "Keyword for searching",
    )]
}

/// Content fields shared by issue creation and update
///
/// Returned as declared for creation; update makes them all optional.
pub fn issue_content() -> Vec<FieldSpec> {
    vec![
        FieldSpec::required("projectId", FieldType::integer(), "Project id"),
        FieldSpec::required("summary", FieldType::String, "Summary of the issue"),
        FieldSpec::optional("description", FieldType::String, "Description of the issue"),
        FieldSpec::required("issueTypeId", FieldType::integer(), "Issue type id"),
        FieldSpec::required("priorityId", FieldType::integer(), "Priority id"),
        FieldSpec::optional("categoryId", FieldType::integer(), "Category id"),
        FieldSpec::optional("versionId", FieldType::integer(), "Version id"),
        FieldSpec::optional("milestoneId", FieldType::integer(), "Milestone id"),
        FieldSpec::optional("assigneeId", FieldType::integer(), "Assignee id"),
        FieldSpec::optional(
            "startDate",
            FieldType::String,
            "Start date of the issue (YYYY-MM-DD format)",
        ),
        FieldSpec::optional(
            "dueDate",
            FieldType::String,
            "Due date of the issue (YYYY-MM-DD format)",
        ),
        FieldSpec::optional(
            "estimatedHours",
            FieldType::Number,
            "Estimated hours for the issue",
        ),
        FieldSpec::optional("actualHours", FieldType::Number, "Actual hours for the issue"),
    ]
}

/// `issueIdOrKey`
pub fn issue_identity() -> Vec<FieldSpec> {
    vec![FieldSpec::required(
        "issueIdOrKey",
        FieldType::PathSegment,
        "Issue ID or Issue Key",
    )]
}

/// `projectIdOrKey`
pub fn project_identity() -> Vec<FieldSpec> {
    vec![FieldSpec::required(
        "projectIdOrKey",
        FieldType::PathSegment,
        "Project ID or Project Key",
    )]
}

/// `wikiId`
pub fn wiki_identity() -> Vec<FieldSpec> {
    vec![FieldSpec::required(
        "wikiId",
        FieldType::integer(),
        "Wiki page ID",
    )]
}

/// `mailNotify`
pub fn mail_notify() -> Vec<FieldSpec> {
    vec![FieldSpec::optional(
        "mailNotify",
        FieldType::Boolean,
        "True make to notify by Email",
    )]
}
