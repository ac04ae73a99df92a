use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum TemplateError {
    #[error("Invalid template '{template}': {reason}")]
    Invalid { template: String, reason: String },
}
