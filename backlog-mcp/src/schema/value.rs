//! Validated parameter values
//!
//! [`ValidatedParams`] is what a [`ParameterSchema`](super::ParameterSchema)
//! produces from raw tool arguments: defaults filled in, fields kept in schema
//! declaration order, absent optional fields simply missing.

use super::SchemaKind;
use serde_json::{Map, Number, Value};
use std::fmt;

/// A single typed parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Whole number
    Integer(i64),
    /// Floating point number
    Number(f64),
    /// Boolean flag
    Bool(bool),
    /// Text, including enumerated values
    Text(String),
    /// Ordered list of values
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Convert back into a JSON value
    pub fn to_json(&self) -> Value {
        match self {
            Self::Integer(i) => Value::Number(Number::from(*i)),
            Self::Number(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
            Self::Bool(b) => Value::Bool(*b),
            Self::Text(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
        }
    }

    /// Borrow the text of a `Text` value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Scalars render the way they appear in a query string; lists join with commas.
impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

/// Tool input after schema validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedParams {
    kind: SchemaKind,
    values: Vec<(&'static str, ParamValue)>,
}

impl ValidatedParams {
    pub(crate) fn new(kind: SchemaKind, values: Vec<(&'static str, ParamValue)>) -> Self {
        Self { kind, values }
    }

    /// Schema these parameters were validated against
    pub fn kind(&self) -> SchemaKind {
        self.kind
    }

    /// Look up a field value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Whether a field is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Render a field for display, empty when absent
    pub fn display_value(&self, name: &str) -> String {
        self.get(name).map(ToString::to_string).unwrap_or_default()
    }

    /// Iterate over present fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ParamValue)> {
        self.values.iter().map(|(name, value)| (*name, value))
    }

    /// Names of present fields in declaration order
    pub fn field_names(&self) -> Vec<&'static str> {
        self.values.iter().map(|(name, _)| *name).collect()
    }

    /// Number of present fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field is present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy of these parameters with one field removed
    pub fn without(&self, name: &str) -> Self {
        Self {
            kind: self.kind,
            values: self
                .values
                .iter()
                .filter(|(field, _)| *field != name)
                .cloned()
                .collect(),
        }
    }

    /// Split off the schema's path identity field
    ///
    /// Returns the rendered identity (if the schema has one and it is present)
    /// and the remaining fields.
    pub fn split_path_identity(&self) -> (Option<String>, Self) {
        match self.kind.path_field() {
            Some(field) => (
                self.get(field).map(ToString::to_string),
                self.without(field),
            ),
            None => (None, self.clone()),
        }
    }

    /// Present fields as a JSON object
    pub fn to_json_object(&self) -> Map<String, Value> {
        self.values
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_json()))
            .collect()
    }
}
