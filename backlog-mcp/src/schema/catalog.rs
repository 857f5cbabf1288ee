//! The twelve tool schemas

use super::groups;
use super::{FieldSpec, FieldType, ParamValue, ParameterSchema, SchemaKind};

/// Build the schema for `kind`
pub fn schema_for(kind: SchemaKind) -> ParameterSchema {
    match kind {
        SchemaKind::ProjectList => ParameterSchema::new(kind, [project_filters()]),
        SchemaKind::Project => ParameterSchema::new(kind, [groups::project_identity()]),
        SchemaKind::IssueList => ParameterSchema::new(
            kind,
            [
                groups::pagination(),
                groups::date_range(),
                groups::entity_ids(),
                groups::conditions(),
                groups::sorting(),
                groups::keyword(),
            ],
        ),
        SchemaKind::Issue | SchemaKind::DeleteIssue => {
            ParameterSchema::new(kind, [groups::issue_identity()])
        }
        SchemaKind::AddIssue => ParameterSchema::new(kind, [groups::issue_content()]),
        SchemaKind::UpdateIssue => ParameterSchema::new(
            kind,
            [
                groups::issue_identity(),
                all_optional(groups::issue_content()),
            ],
        ),
        SchemaKind::WikiList => {
            ParameterSchema::new(kind, [groups::project_identity(), groups::keyword()])
        }
        SchemaKind::Wiki => ParameterSchema::new(kind, [groups::wiki_identity()]),
        SchemaKind::AddWiki => ParameterSchema::new(
            kind,
            [
                vec![
                    FieldSpec::required("projectId", FieldType::integer(), "Project ID"),
                    FieldSpec::required("name", FieldType::String, "Page Name"),
                    FieldSpec::required("content", FieldType::String, "Content"),
                ],
                groups::mail_notify(),
            ],
        ),
        SchemaKind::UpdateWiki => ParameterSchema::new(
            kind,
            [
                groups::wiki_identity(),
                vec![
                    FieldSpec::optional("name", FieldType::String, "Page Name"),
                    FieldSpec::optional("content", FieldType::String, "Content"),
                ],
                groups::mail_notify(),
            ],
        ),
        SchemaKind::DeleteWiki => {
            ParameterSchema::new(kind, [groups::wiki_identity(), groups::mail_notify()])
        }
    }
}

fn project_filters() -> Vec<FieldSpec> {
    vec![
        FieldSpec::optional(
            "archived",
            FieldType::Boolean,
            "For unspecified parameters, this form returns all projects. \
             For false parameters, it returns unarchived projects. \
             For true parameters, it returns archived projects.",
        ),
        FieldSpec::optional(
            "all",
            FieldType::Boolean,
            "Only applies to administrators. \
             If true, it returns all projects. \
             If false, it returns only projects they have joined (set to false by default).",
        )
        .with_default(ParamValue::Bool(false)),
    ]
}

fn all_optional(fields: Vec<FieldSpec>) -> Vec<FieldSpec> {
    fields.into_iter().map(FieldSpec::into_optional).collect()
}
