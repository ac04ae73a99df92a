use anyhow::Result;
use itertools::Itertools;
use log::warn;
use serde_json::json;

use crate::host::{DynamicString, Host, RequestId};
use crate::model::EndpointEntry;
use crate::serializer::convert::endpoint_template;
use crate::serializer::{Config, VariableStore};

/// Turns each endpoint entry of a request into a base url template.
///
/// References are resolved against `store`; a reference that does not resolve is dropped. Equal
/// templates are collapsed, keeping the first occurrence.
pub fn resolve_templates(
    endpoints: &[EndpointEntry],
    store: &VariableStore,
    config: &Config,
) -> Vec<DynamicString> {
    endpoints
        .iter()
        .filter_map(|entry| match entry {
            EndpointEntry::Reference(reference) => match store.endpoint(&reference.uuid) {
                Some(variable) => Some(DynamicString::from(variable.reference_value())),
                None => {
                    warn!("dropping unresolved endpoint reference '{}'", reference.uuid);
                    None
                }
            },
            EndpointEntry::Inline(url) => Some(endpoint_template(url, config)),
        })
        .unique()
        .collect_vec()
}

/// Builds the url of `request` from its base templates followed by `pathname`.
///
/// With several base templates, a request variable is added to `request` so the user can switch
/// between them; its schema enumerates every template, each as its JSON string, and the first is
/// the default.
pub fn url_template(
    host: &mut dyn Host,
    request: RequestId,
    mut templates: Vec<DynamicString>,
    pathname: &str,
    config: &Config,
) -> Result<DynamicString> {
    let path = DynamicString::from(pathname);
    match templates.len() {
        0 => {
            warn!("no usable endpoint for {}, url is the path alone", request);
            Ok(path)
        }
        1 => Ok(templates.remove(0).concat(path)),
        _ => {
            let choices = templates
                .iter()
                .map(serde_json::to_string)
                .collect::<Result<Vec<_>, _>>()?;
            let schema = json!({ "type": "string", "enum": choices });
            let variable = host.add_request_variable(
                request,
                &config.endpoint_variable_name,
                templates.remove(0),
                &config.endpoint_variable_description,
            )?;
            host.set_request_variable_schema(variable, &schema.to_string())?;
            Ok(DynamicString::from(variable.reference_value()).concat(path))
        }
    }
}
