//! Declarative parameter schemas for the Backlog tools
//!
//! Each tool accepts input described by a [`ParameterSchema`]. The same field
//! declarations drive both runtime validation ([`ParameterSchema::validate`])
//! and the published JSON input contract ([`descriptor::to_input_schema`]), so
//! the two cannot drift apart.

pub mod catalog;
pub mod descriptor;
pub mod groups;
pub mod validation;
pub mod value;

pub use descriptor::to_input_schema;
pub use validation::{FieldViolation, SchemaViolations};
pub use value::{ParamValue, ValidatedParams};

/// Semantic type of a schema field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Whole number with optional inclusive bounds
    Integer {
        /// Smallest accepted value
        min: Option<i64>,
        /// Largest accepted value
        max: Option<i64>,
    },
    /// Any JSON number
    Number,
    /// `true` or `false`
    Boolean,
    /// Free text
    String,
    /// Text naming a resource in the URL path: non-empty and not a dot segment
    PathSegment,
    /// One of a closed set of strings
    StringEnum(&'static [&'static str]),
    /// Ordered list whose items all have the given type
    Array(Box<FieldType>),
}

/// Path identities that would be resolved away as dot segments
pub const DOT_SEGMENTS: &[&str] = &[".", ".."];

impl FieldType {
    /// Unbounded integer
    pub fn integer() -> Self {
        Self::Integer {
            min: None,
            max: None,
        }
    }

    /// Integer within inclusive bounds
    pub fn integer_range(min: Option<i64>, max: Option<i64>) -> Self {
        Self::Integer { min, max }
    }

    /// List of unbounded integers
    pub fn integer_array() -> Self {
        Self::Array(Box::new(Self::integer()))
    }

    /// JSON Schema type keyword for this field type
    pub fn json_type(&self) -> &'static str {
        match self {
            Self::Integer { .. } => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::String | Self::PathSegment | Self::StringEnum(_) => "string",
            Self::Array(_) => "array",
        }
    }
}

/// Declaration of one accepted field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Field name as it appears in tool arguments and API requests
    pub name: &'static str,
    /// Human readable description published to clients
    pub description: &'static str,
    /// Accepted value type and constraints
    pub field_type: FieldType,
    /// Whether the field must be supplied
    pub required: bool,
    /// Value used when an optional field is omitted
    pub default: Option<ParamValue>,
}

impl FieldSpec {
    /// A field that must be present
    pub fn required(name: &'static str, field_type: FieldType, description: &'static str) -> Self {
        Self {
            name,
            description,
            field_type,
            required: true,
            default: None,
        }
    }

    /// A field that may be omitted
    pub fn optional(name: &'static str, field_type: FieldType, description: &'static str) -> Self {
        Self {
            name,
            description,
            field_type,
            required: false,
            default: None,
        }
    }

    /// Fill in `value` when the field is omitted
    pub fn with_default(mut self, value: ParamValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Copy of this field with the required flag cleared
    pub fn into_optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Tag identifying each tool's schema
///
/// The tag selects the field set and also names the path identity field that
/// the gateway folds into the request URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    /// `backlog_get_projects`
    ProjectList,
    /// `backlog_get_project`
    Project,
    /// `backlog_get_issues`
    IssueList,
    /// `backlog_get_issue`
    Issue,
    /// `backlog_add_issue`
    AddIssue,
    /// `backlog_update_issue`
    UpdateIssue,
    /// `backlog_delete_issue`
    DeleteIssue,
    /// `backlog_get_wikis`
    WikiList,
    /// `backlog_get_wiki`
    Wiki,
    /// `backlog_add_wiki`
    AddWiki,
    /// `backlog_update_wiki`
    UpdateWiki,
    /// `backlog_delete_wiki`
    DeleteWiki,
}

impl SchemaKind {
    /// Every schema, in catalog order
    pub const ALL: [SchemaKind; 12] = [
        Self::ProjectList,
        Self::Project,
        Self::IssueList,
        Self::Issue,
        Self::AddIssue,
        Self::UpdateIssue,
        Self::DeleteIssue,
        Self::WikiList,
        Self::Wiki,
        Self::AddWiki,
        Self::UpdateWiki,
        Self::DeleteWiki,
    ];

    /// Field carried in the URL path rather than the query or body
    ///
    /// List schemas that merely filter by project (e.g. wikis by
    /// `projectIdOrKey`) have none: their fields all go to the query string.
    pub fn path_field(self) -> Option<&'static str> {
        match self {
            Self::Project => Some("projectIdOrKey"),
            Self::Issue | Self::UpdateIssue | Self::DeleteIssue => Some("issueIdOrKey"),
            Self::Wiki | Self::UpdateWiki | Self::DeleteWiki => Some("wikiId"),
            Self::ProjectList
            | Self::IssueList
            | Self::AddIssue
            | Self::WikiList
            | Self::AddWiki => None,
        }
    }

    /// Build the schema for this kind
    pub fn schema(self) -> ParameterSchema {
        catalog::schema_for(self)
    }
}

/// Accepted input shape of one tool
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSchema {
    /// Which schema this is
    pub kind: SchemaKind,
    /// Accepted fields in declaration order
    pub fields: Vec<FieldSpec>,
}

impl ParameterSchema {
    /// Create a schema from composed field groups
    pub fn new(kind: SchemaKind, groups: impl IntoIterator<Item = Vec<FieldSpec>>) -> Self {
        Self {
            kind,
            fields: groups.into_iter().flatten().collect(),
        }
    }

    /// Look up a field declaration
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the required fields in declaration order
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_path_field_is_declared_and_required() {
        for kind in SchemaKind::ALL {
            if let Some(field) = kind.path_field() {
                let schema = kind.schema();
                let spec = schema
                    .field(field)
                    .unwrap_or_else(|| panic!("{kind:?} lacks {field}"));
                assert!(spec.required, "{kind:?}.{field} should be required");
                assert!(
                    matches!(
                        spec.field_type,
                        FieldType::PathSegment | FieldType::Integer { .. }
                    ),
                    "{kind:?}.{field} must not accept dot segments"
                );
            }
        }
    }

    #[test]
    fn test_schema_kind_matches_built_schema() {
        for kind in SchemaKind::ALL {
            assert_eq!(kind.schema().kind, kind);
        }
    }

    #[test]
    fn test_field_names_unique_within_schema() {
        for kind in SchemaKind::ALL {
            let schema = kind.schema();
            let mut names: Vec<_> = schema.fields.iter().map(|f| f.name).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate field in {kind:?}");
        }
    }
}
