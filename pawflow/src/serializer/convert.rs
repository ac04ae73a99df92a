//! Pure conversions from model values to host values.

use serde_json::Value;

use crate::host::{DynamicString, DynamicValue, Piece, RecordParameter};
use crate::model::{Auth, ToJsonSchema, Url, UrlComponent, DELIMITERS};
use crate::serializer::Config;

const SCHEME_SEPARATOR: char = ':';
const CHOICE_VALUE: &str = ", ";
const CHOICE_SEPARATOR: &str = ",";

/// Wraps a JSON document as a host value.
pub fn json_value(json: &Value) -> DynamicString {
    DynamicString::from(DynamicValue::Json {
        json: json.to_string(),
    })
}

pub fn schema_of(entity: &impl ToJsonSchema) -> DynamicString {
    json_value(&entity.to_json_schema())
}

/// `"https:"` -> `"https"`
pub fn strip_scheme(protocol: &str) -> &str {
    protocol.trim_end_matches(SCHEME_SEPARATOR)
}

/// A single scheme becomes a literal. Several schemes become a selector where only the first is
/// enabled.
pub fn protocol_value(protocols: &[String], config: &Config) -> Piece {
    match protocols {
        [] => Piece::from(config.default_protocol.as_str()),
        [protocol] => Piece::from(strip_scheme(protocol)),
        _ => Piece::from(DynamicValue::MultiSelector {
            choices: protocols
                .iter()
                .enumerate()
                .map(|(i, protocol)| RecordParameter {
                    key: strip_scheme(protocol).to_string(),
                    value: CHOICE_VALUE.to_string(),
                    enabled: i == 0,
                })
                .collect(),
            separator: CHOICE_SEPARATOR.to_string(),
        }),
    }
}

pub fn component_string(component: Option<&UrlComponent>) -> String {
    component
        .map(|component| component.generate(DELIMITERS))
        .unwrap_or_default()
}

/// `protocol://hostname[:port]pathname`, each part a separate piece.
pub fn endpoint_template(endpoint: &Url, config: &Config) -> DynamicString {
    let port = component_string(endpoint.port.as_ref());
    let port_separator = if port.is_empty() { "" } else { ":" };
    DynamicString::new([
        protocol_value(&endpoint.protocol, config),
        Piece::from("://"),
        Piece::from(component_string(endpoint.hostname.as_ref())),
        Piece::from(port_separator),
        Piece::from(port),
        Piece::from(component_string(endpoint.pathname.as_ref())),
    ])
}

/// Only basic auth has a host equivalent; every other scheme becomes an empty value.
pub fn auth_value(auth: &Auth) -> DynamicString {
    match auth {
        Auth::Basic { username, password } => DynamicString::from(DynamicValue::BasicAuth {
            username: username.clone().unwrap_or_default(),
            password: password.clone().unwrap_or_default(),
        }),
        _ => DynamicString::default(),
    }
}
