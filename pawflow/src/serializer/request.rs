use anyhow::Result;
use log::debug;

use crate::host::{DynamicString, GroupId, Host, RequestId};
use crate::model::{Api, Request, Resource, UrlComponent, DELIMITERS};
use crate::serializer::endpoint::{resolve_templates, url_template};
use crate::serializer::{Config, VariableStore};

/// Creates one request group per resource, in resource order.
pub fn create_requests(
    host: &mut dyn Host,
    store: &VariableStore,
    api: &Api,
    config: &Config,
) -> Result<Vec<GroupId>> {
    let mut groups = Vec::with_capacity(api.resources.len());
    for resource in &api.resources {
        groups.push(build_group(host, store, resource, config)?);
    }
    Ok(groups)
}

pub fn build_group(
    host: &mut dyn Host,
    store: &VariableStore,
    resource: &Resource,
    config: &Config,
) -> Result<GroupId> {
    let name = resource
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(&config.default_group_name);
    debug!(
        "creating request group '{}' with {} requests",
        name,
        resource.methods.len()
    );
    let group = host.create_request_group(name)?;
    for (method, request) in &resource.methods {
        let child = build_request(host, store, &resource.path, method, request, config)?;
        host.append_child(group, child)?;
    }
    Ok(group)
}

/// Creates a request whose url is its base endpoint(s) followed by `path`.
///
/// `method_key` is the key the request is listed under in its resource, used when the request
/// itself has no method.
pub fn build_request(
    host: &mut dyn Host,
    store: &VariableStore,
    path: &UrlComponent,
    method_key: &str,
    request: &Request,
    config: &Config,
) -> Result<RequestId> {
    let pathname = path.generate(DELIMITERS);
    let name = request
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(&pathname);
    let method = if request.method.is_empty() {
        method_key
    } else {
        request.method.as_str()
    };
    let description = request.description.as_deref().unwrap_or_default();

    let id = host.create_request(
        name,
        &method.to_uppercase(),
        DynamicString::default(),
        description,
    )?;
    let templates = resolve_templates(&request.endpoints, store, config);
    let url = url_template(host, id, templates, &pathname, config)?;
    host.set_request_url(id, url)?;
    Ok(id)
}
