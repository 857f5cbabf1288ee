//! Runtime validation of tool arguments against a [`ParameterSchema`]
//!
//! Validation is all-or-nothing: every problem in the input is collected and
//! reported together, and no partially validated parameters are ever returned.

use super::{FieldType, ParamValue, ParameterSchema, ValidatedParams, DOT_SEGMENTS};
use serde_json::{Map, Value};
use std::fmt;

/// One field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field path, e.g. `count` or `projectId[1]`
    pub field: String,
    /// What is wrong with it
    pub problem: String,
}

impl FieldViolation {
    fn new(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            problem: problem.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.problem)
    }
}

/// Every violation found in one set of arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolations {
    violations: Vec<FieldViolation>,
}

impl SchemaViolations {
    /// Violations in the order they were found
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether any violation concerns `field`
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for SchemaViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaViolations {}

impl ParameterSchema {
    /// Validate raw tool arguments
    ///
    /// Required fields must be present, present fields must match their type
    /// and constraints, and fields the schema does not declare are rejected.
    /// `null` is a type mismatch, not an omission. Omitted optional fields
    /// with a default are filled in.
    pub fn validate(
        &self,
        arguments: &Map<String, Value>,
    ) -> Result<ValidatedParams, SchemaViolations> {
        let mut violations = Vec::new();
        let mut values = Vec::new();

        for spec in &self.fields {
            match arguments.get(spec.name) {
                Some(raw) => match check_value(spec.name, &spec.field_type, raw) {
                    Ok(value) => values.push((spec.name, value)),
                    Err(mut found) => violations.append(&mut found),
                },
                None if spec.required => {
                    violations.push(FieldViolation::new(spec.name, "Required"));
                }
                None => {
                    if let Some(default) = &spec.default {
                        values.push((spec.name, default.clone()));
                    }
                }
            }
        }

        for key in arguments.keys() {
            if self.field(key).is_none() {
                violations.push(FieldViolation::new(key.as_str(), "Unrecognized field"));
            }
        }

        if violations.is_empty() {
            Ok(ValidatedParams::new(self.kind, values))
        } else {
            Err(SchemaViolations { violations })
        }
    }
}

fn check_value(
    path: &str,
    field_type: &FieldType,
    raw: &Value,
) -> Result<ParamValue, Vec<FieldViolation>> {
    let mismatch = || vec![type_mismatch(path, field_type, raw)];

    match field_type {
        FieldType::Integer { min, max } => {
            let Value::Number(number) = raw else {
                return Err(mismatch());
            };
            let value = match (number.as_i64(), number.as_f64()) {
                (Some(value), _) => value,
                (None, _) if number.is_u64() => {
                    return Err(vec![FieldViolation::new(path, "Integer out of range")]);
                }
                (None, Some(float)) if is_integral(float) => float as i64,
                (None, _) => {
                    return Err(vec![FieldViolation::new(
                        path,
                        "Expected integer, received float",
                    )]);
                }
            };
            let mut problems = Vec::new();
            if let Some(min) = min.filter(|min| value < *min) {
                problems.push(FieldViolation::new(
                    path,
                    format!("Number must be greater than or equal to {min}"),
                ));
            }
            if let Some(max) = max.filter(|max| value > *max) {
                problems.push(FieldViolation::new(
                    path,
                    format!("Number must be less than or equal to {max}"),
                ));
            }
            if problems.is_empty() {
                Ok(ParamValue::Integer(value))
            } else {
                Err(problems)
            }
        }
        FieldType::Number => raw
            .as_f64()
            .map(ParamValue::Number)
            .ok_or_else(mismatch),
        FieldType::Boolean => raw.as_bool().map(ParamValue::Bool).ok_or_else(mismatch),
        FieldType::String => raw
            .as_str()
            .map(|s| ParamValue::Text(s.to_string()))
            .ok_or_else(mismatch),
        FieldType::PathSegment => {
            let text = raw.as_str().ok_or_else(mismatch)?;
            if text.is_empty() {
                Err(vec![FieldViolation::new(
                    path,
                    "String must contain at least 1 character(s)",
                )])
            } else if DOT_SEGMENTS.contains(&text) {
                Err(vec![FieldViolation::new(
                    path,
                    format!("Invalid identifier '{text}'"),
                )])
            } else {
                Ok(ParamValue::Text(text.to_string()))
            }
        }
        FieldType::StringEnum(options) => {
            let text = raw.as_str().ok_or_else(mismatch)?;
            if options.contains(&text) {
                Ok(ParamValue::Text(text.to_string()))
            } else {
                Err(vec![FieldViolation::new(
                    path,
                    format!(
                        "Invalid enum value. Expected {}, received '{text}'",
                        options
                            .iter()
                            .map(|o| format!("'{o}'"))
                            .collect::<Vec<_>>()
                            .join(" | ")
                    ),
                )])
            }
        }
        FieldType::Array(item_type) => {
            let items = raw.as_array().ok_or_else(mismatch)?;
            let mut problems = Vec::new();
            let mut checked = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match check_value(&format!("{path}[{index}]"), item_type, item) {
                    Ok(value) => checked.push(value),
                    Err(mut found) => problems.append(&mut found),
                }
            }
            if problems.is_empty() {
                Ok(ParamValue::List(checked))
            } else {
                Err(problems)
            }
        }
    }
}

/// Whole-valued float within `i64` range, e.g. `10.0`
fn is_integral(float: f64) -> bool {
    float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64
}

fn type_mismatch(path: &str, expected: &FieldType, raw: &Value) -> FieldViolation {
    FieldViolation::new(
        path,
        format!(
            "Expected {}, received {}",
            expected.json_type(),
            received_type(raw)
        ),
    )
}

fn received_type(raw: &Value) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
