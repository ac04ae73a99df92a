use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{Constraint, ToJsonSchema};

/// A named input to one or more requests, described by a type and a set of [Constraint]s.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub key: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub format: Option<String>,
    pub default: Option<Value>,
    pub constraints: Vec<Constraint>,
}

impl ToJsonSchema for Parameter {
    /// Merges the schema fragments of every constraint, in order, then overlays the parameter's
    /// own type information. Later fragments win on key collisions.
    fn to_json_schema(&self) -> Value {
        let mut schema = Map::new();
        for constraint in &self.constraints {
            match constraint.to_json_schema() {
                Value::Object(fragment) => schema.extend(fragment),
                other => debug!("ignoring non-object schema fragment {}", other),
            }
        }

        let overlay = [
            ("type", self.ty.clone().map(Value::String)),
            ("format", self.format.clone().map(Value::String)),
            ("default", self.default.clone()),
            ("title", self.name.clone().map(Value::String)),
            ("description", self.description.clone().map(Value::String)),
        ];
        for (key, value) in overlay {
            if let Some(value) = value {
                schema.insert(key.to_string(), value);
            }
        }

        Value::Object(schema)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::model::{Constraint, Parameter, ToJsonSchema};

    #[test]
    fn merges_constraints_and_type() {
        let parameter = Parameter {
            name: Some("limit".to_string()),
            ty: Some("integer".to_string()),
            default: Some(json!(20)),
            constraints: vec![Constraint::Minimum(1.0), Constraint::Maximum(100.0)],
            ..Default::default()
        };
        assert_eq!(
            parameter.to_json_schema(),
            json!({
                "minimum": 1.0,
                "maximum": 100.0,
                "type": "integer",
                "default": 20,
                "title": "limit",
            })
        );
    }

    #[test]
    fn empty_parameter_is_empty_schema() {
        assert_eq!(Parameter::default().to_json_schema(), json!({}));
    }

    #[test]
    fn non_object_fragment_is_ignored() {
        let parameter = Parameter {
            constraints: vec![
                Constraint::JsonSchema(json!(true)),
                Constraint::Pattern("^a".to_string()),
            ],
            ..Default::default()
        };
        assert_eq!(parameter.to_json_schema(), json!({ "pattern": "^a" }));
    }
}
