use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Something that can describe itself as a JSON schema.
pub trait ToJsonSchema {
    fn to_json_schema(&self) -> Value;
}

/// A single restriction on the values a parameter may take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "value", rename_all = "camelCase")]
pub enum Constraint {
    MultipleOf(f64),
    Maximum(f64),
    ExclusiveMaximum(f64),
    Minimum(f64),
    ExclusiveMinimum(f64),
    MaximumLength(u64),
    MinimumLength(u64),
    Pattern(String),
    MaximumItems(u64),
    MinimumItems(u64),
    UniqueItems(bool),
    MaximumProperties(u64),
    MinimumProperties(u64),
    Enum(Vec<Value>),
    /// An arbitrary schema passed through untouched.
    JsonSchema(Value),
}

impl ToJsonSchema for Constraint {
    fn to_json_schema(&self) -> Value {
        match self {
            Constraint::MultipleOf(value) => json!({ "multipleOf": value }),
            Constraint::Maximum(value) => json!({ "maximum": value }),
            Constraint::ExclusiveMaximum(value) => {
                json!({ "maximum": value, "exclusiveMaximum": true })
            }
            Constraint::Minimum(value) => json!({ "minimum": value }),
            Constraint::ExclusiveMinimum(value) => {
                json!({ "minimum": value, "exclusiveMinimum": true })
            }
            Constraint::MaximumLength(value) => json!({ "maxLength": value }),
            Constraint::MinimumLength(value) => json!({ "minLength": value }),
            Constraint::Pattern(value) => json!({ "pattern": value }),
            Constraint::MaximumItems(value) => json!({ "maxItems": value }),
            Constraint::MinimumItems(value) => json!({ "minItems": value }),
            Constraint::UniqueItems(value) => json!({ "uniqueItems": value }),
            Constraint::MaximumProperties(value) => json!({ "maxProperties": value }),
            Constraint::MinimumProperties(value) => json!({ "minProperties": value }),
            Constraint::Enum(values) => json!({ "enum": values }),
            Constraint::JsonSchema(schema) => schema.clone(),
        }
    }
}
