use serde::{Deserialize, Serialize};

/// An authentication scheme shared between requests.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Auth {
    Basic {
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
    },
    Digest {
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
    },
    Ntlm {
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
    },
    Negotiate,
    ApiKey {
        name: String,
        #[serde(rename = "in")]
        location: ApiKeyLocation,
    },
    #[serde(rename = "oauth1")]
    OAuth1 {
        #[serde(default)]
        callback: Option<String>,
        #[serde(default)]
        consumer_key: Option<String>,
    },
    #[serde(rename = "oauth2")]
    OAuth2 {
        #[serde(default)]
        flow: Option<String>,
        #[serde(default)]
        authorization_url: Option<String>,
        #[serde(default)]
        token_url: Option<String>,
        #[serde(default)]
        scopes: Vec<String>,
    },
    AwsSig4 {
        #[serde(default)]
        key: Option<String>,
        #[serde(default)]
        region: Option<String>,
        #[serde(default)]
        service: Option<String>,
    },
    Hawk {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        algorithm: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Header,
    Query,
}

impl Auth {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}
