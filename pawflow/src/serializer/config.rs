use serde::{Deserialize, Serialize};

/// Names the serializer gives to the objects it creates when the API does not provide one.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the standard environment domain when the API has no title.
    pub default_title: String,

    /// The single environment of the standard domain.
    pub default_environment: String,

    /// Prepended to the title to name the domain holding multi-environment variables.
    pub variable_domain_prefix: String,

    /// Name of a request group when its resource has none.
    pub default_group_name: String,

    /// Protocol of an endpoint that lists none.
    pub default_protocol: String,

    /// Name of the request variable used to switch between several base endpoints.
    pub endpoint_variable_name: String,

    /// Description of that request variable.
    pub endpoint_variable_description: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_title: "Imports".to_string(),
            default_environment: "Default".to_string(),
            variable_domain_prefix: "Vars - ".to_string(),
            default_group_name: "resource-group".to_string(),
            default_protocol: "http".to_string(),
            endpoint_variable_name: "endpoint".to_string(),
            endpoint_variable_description: "the endpoint of this url".to_string(),
        }
    }
}
