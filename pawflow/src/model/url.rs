use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::parser::{self, TemplateError};

/// The placeholder delimiters used for every template in the model.
pub const DELIMITERS: Delimiters = Delimiters {
    open: '{',
    close: '}',
};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Delimiters {
    pub open: char,
    pub close: char,
}

/// An endpoint, split into independently templated parts.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Url {
    /// Schemes the endpoint is served over, in order of preference, e.g. `["http:", "https:"]`.
    pub protocol: Vec<String>,
    pub hostname: Option<UrlComponent>,
    pub port: Option<UrlComponent>,
    pub pathname: Option<UrlComponent>,
}

/// One templated piece of a URL such as `api.{domain}.com`.
#[derive(Default, Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UrlComponent {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Segment {
    Literal(String),
    /// A named placeholder, stored without its delimiters.
    Variable(String),
}

impl Url {
    pub fn new(protocol: &[&str], hostname: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            protocol: protocol.iter().map(|p| p.to_string()).collect(),
            hostname: Some(UrlComponent::parse(hostname)?),
            ..Default::default()
        })
    }

    pub fn with_port(mut self, port: &str) -> Result<Self, TemplateError> {
        self.port = Some(UrlComponent::parse(port)?);
        Ok(self)
    }

    pub fn with_pathname(mut self, pathname: &str) -> Result<Self, TemplateError> {
        self.pathname = Some(UrlComponent::parse(pathname)?);
        Ok(self)
    }
}

impl UrlComponent {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Parses a template using [DELIMITERS].
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        Self::parse_with(template, DELIMITERS)
    }

    pub fn parse_with(template: &str, delimiters: Delimiters) -> Result<Self, TemplateError> {
        parser::parse_template(template, delimiters).map(Self::new)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Renders the component with placeholders wrapped in `delimiters`, so they survive as
    /// literal text instead of being evaluated.
    pub fn generate(&self, delimiters: Delimiters) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Variable(name) => {
                    out.push(delimiters.open);
                    out.push_str(name);
                    out.push(delimiters.close);
                }
            }
        }
        out
    }

    /// Names of all placeholders in order of appearance.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Variable(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }
}

impl Display for UrlComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.generate(DELIMITERS))
    }
}

impl TryFrom<String> for UrlComponent {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UrlComponent> for String {
    fn from(value: UrlComponent) -> Self {
        value.to_string()
    }
}
