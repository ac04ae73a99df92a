use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use auth::{ApiKeyLocation, Auth};
pub use constraint::{Constraint, ToJsonSchema};
pub use parameter::Parameter;
pub use store::Store;
pub use url::{Delimiters, Segment, Url, UrlComponent, DELIMITERS};

mod auth;
mod constraint;
mod parameter;
mod store;
mod url;

/// A normalized, language-agnostic description of an HTTP API.
///
/// The document is produced by an upstream parsing stage and is treated as read-only here.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Api {
    pub info: Info,
    /// Entities shared between requests, keyed by id.
    pub store: Store,
    pub resources: Vec<Resource>,
}

#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    pub title: Option<String>,
}

/// A path template and the requests that can be made against it, keyed by method name.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    pub name: Option<String>,
    pub path: UrlComponent,
    pub methods: IndexMap<String, Request>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    pub name: Option<String>,
    pub method: String,
    /// Base endpoints this request is reachable through, in order of preference.
    pub endpoints: Vec<EndpointEntry>,
    pub description: Option<String>,
}

/// One base endpoint of a [Request]: either a pointer into [Store::endpoint] or a [Url] defined
/// in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndpointEntry {
    Reference(Reference),
    Inline(Url),
}

/// A weak link by id into a [Store] slot. The id is not guaranteed to exist.
///
/// Only `uuid` is read; other fields such as `type` or `overlay` are ignored.
#[derive(Default, Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub uuid: String,
}

/// A single logical value that differs per named environment, e.g. "staging" vs "production".
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variable {
    pub name: Option<String>,
    /// Context name to literal value.
    pub values: IndexMap<String, String>,
}

impl Api {
    /// The title of the API, if it has a non-empty one.
    pub fn title(&self) -> Option<&str> {
        self.info.title.as_deref().filter(|title| !title.is_empty())
    }
}

impl Reference {
    pub fn new(uuid: impl ToString) -> Self {
        Self {
            uuid: uuid.to_string(),
        }
    }
}

impl Variable {
    pub fn new<K: ToString, V: ToString>(values: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            name: None,
            values: values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::model::{Api, EndpointEntry, Reference, Segment};

    #[test]
    fn empty_title_is_absent() {
        let mut api = Api::default();
        assert_eq!(api.title(), None);
        api.info.title = Some("".to_string());
        assert_eq!(api.title(), None);
        api.info.title = Some("Petstore".to_string());
        assert_eq!(api.title(), Some("Petstore"));
    }

    mod deserialize {
        use super::*;

        #[test]
        fn endpoint_entries() -> Result<()> {
            let entries: Vec<EndpointEntry> = serde_json::from_str(
                r#"[
                    { "uuid": "base" },
                    { "protocol": ["https:"], "hostname": "{host}.example.com" }
                ]"#,
            )?;
            assert_eq!(entries[0], EndpointEntry::Reference(Reference::new("base")));
            match &entries[1] {
                EndpointEntry::Inline(url) => {
                    assert_eq!(url.protocol, vec!["https:".to_string()]);
                    assert_eq!(
                        url.hostname.as_ref().map(|c| c.segments()),
                        Some(
                            &[
                                Segment::Variable("host".to_string()),
                                Segment::Literal(".example.com".to_string()),
                            ][..]
                        )
                    );
                }
                other => panic!("expected inline url, got {:?}", other),
            }
            Ok(())
        }

        #[test]
        fn reference_ignores_extra_fields() -> Result<()> {
            let entries: Vec<EndpointEntry> = serde_json::from_str(
                r#"[
                    { "type": "endpoint", "uuid": "prod" },
                    { "type": "endpoint", "uuid": "dev", "overlay": { "port": "8080" } }
                ]"#,
            )?;
            assert_eq!(
                entries,
                vec![
                    EndpointEntry::Reference(Reference::new("prod")),
                    EndpointEntry::Reference(Reference::new("dev")),
                ]
            );
            Ok(())
        }

        #[test]
        fn full_document() -> Result<()> {
            let api: Api = serde_json::from_str(
                r#"{
                    "info": { "title": "Petstore" },
                    "store": {
                        "endpoint": {
                            "prod": { "protocol": ["https:"], "hostname": "pets.io" }
                        },
                        "variable": {
                            "token": { "values": { "prod": "a", "staging": "b" } }
                        }
                    },
                    "resources": [
                        {
                            "path": "/pets/{petId}",
                            "methods": {
                                "get": { "method": "get", "endpoints": [{ "uuid": "prod" }] }
                            }
                        }
                    ]
                }"#,
            )?;
            assert_eq!(api.title(), Some("Petstore"));
            assert_eq!(api.store.endpoint.len(), 1);
            assert!(api.store.constraint.is_empty());
            let values = &api.store.variable["token"].values;
            assert_eq!(values.keys().collect::<Vec<_>>(), vec!["prod", "staging"]);
            let resource = &api.resources[0];
            assert_eq!(resource.path.to_string(), "/pets/{petId}");
            assert_eq!(resource.methods["get"].method, "get");
            Ok(())
        }
    }
}
