//! JSON Schema rendering of parameter schemas
//!
//! Generic over every [`FieldType`], so adding a field to a schema is enough to
//! publish it; there is no per-tool input schema to keep in sync by hand.

use super::{FieldSpec, FieldType, ParameterSchema, DOT_SEGMENTS};
use serde_json::{json, Map, Value};

/// Render `schema` as a JSON Schema object suitable for a tool's `inputSchema`
pub fn to_input_schema(schema: &ParameterSchema) -> Map<String, Value> {
    let properties: Map<String, Value> = schema
        .fields
        .iter()
        .map(|spec| (spec.name.to_string(), Value::Object(property(spec))))
        .collect();

    let mut input = Map::new();
    input.insert("type".to_string(), json!("object"));
    input.insert("properties".to_string(), Value::Object(properties));

    let required = schema.required_fields();
    if !required.is_empty() {
        input.insert("required".to_string(), json!(required));
    }
    input.insert("additionalProperties".to_string(), Value::Bool(false));
    input
}

fn property(spec: &FieldSpec) -> Map<String, Value> {
    let mut prop = type_keywords(&spec.field_type);
    prop.insert("description".to_string(), json!(spec.description));
    if let Some(default) = &spec.default {
        prop.insert("default".to_string(), default.to_json());
    }
    prop
}

fn type_keywords(field_type: &FieldType) -> Map<String, Value> {
    let mut out = Map::new();
    out.insert("type".to_string(), json!(field_type.json_type()));

    match field_type {
        FieldType::Integer { min, max } => {
            if let Some(min) = min {
                out.insert("minimum".to_string(), json!(min));
            }
            if let Some(max) = max {
                out.insert("maximum".to_string(), json!(max));
            }
        }
        FieldType::PathSegment => {
            out.insert("minLength".to_string(), json!(1));
            out.insert("not".to_string(), json!({ "enum": DOT_SEGMENTS }));
        }
        FieldType::StringEnum(options) => {
            out.insert("enum".to_string(), json!(options));
        }
        FieldType::Array(items) => {
            out.insert("items".to_string(), Value::Object(type_keywords(items)));
        }
        FieldType::Number | FieldType::Boolean | FieldType::String => {}
    }
    out
}
