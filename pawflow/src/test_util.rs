use anyhow::Result;

use crate::model::{Api, EndpointEntry, Reference, Request, Resource, Url, UrlComponent, Variable};

pub fn test_request(method: &str, endpoints: Vec<EndpointEntry>) -> Request {
    Request {
        method: method.to_string(),
        endpoints,
        ..Default::default()
    }
}

/// A resource with one request per method, each reachable through the shared "prod" endpoint.
pub fn test_resource(name: Option<&str>, path: &str, methods: &[&str]) -> Result<Resource> {
    Ok(Resource {
        name: name.map(|s| s.to_string()),
        path: UrlComponent::parse(path)?,
        methods: methods
            .iter()
            .map(|method| {
                let endpoints = vec![EndpointEntry::Reference(Reference::new("prod"))];
                (method.to_string(), test_request(method, endpoints))
            })
            .collect(),
    })
}

/// Two resources sharing a "prod" endpoint, plus a multi-environment "token" variable.
pub fn test_api() -> Result<Api> {
    let mut api = Api::default();
    api.info.title = Some("Petstore".to_string());
    api.store.endpoint.insert(
        "prod".to_string(),
        Url::new(&["https:"], "{region}.pets.io")?.with_pathname("/v1")?,
    );
    api.store.variable.insert(
        "token".to_string(),
        Variable::new([("prod", "p-token"), ("staging", "s-token")]),
    );
    api.resources
        .push(test_resource(Some("pets"), "/pets/{petId}", &["get", "delete"])?);
    api.resources
        .push(test_resource(Some("owners"), "/owners", &["get"])?);
    Ok(api)
}
