use thiserror::Error;

use crate::host::{DomainId, EnvironmentId, GroupId, RequestId, RequestVariableId, VariableId};

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum HostError {
    #[error("Unknown environment domain {0}")]
    UnknownDomain(DomainId),

    #[error("Unknown environment {0}")]
    UnknownEnvironment(EnvironmentId),

    #[error("Unknown environment variable {0}")]
    UnknownVariable(VariableId),

    #[error("Unknown request group {0}")]
    UnknownGroup(GroupId),

    #[error("Unknown request {0}")]
    UnknownRequest(RequestId),

    #[error("Unknown request variable {0}")]
    UnknownRequestVariable(RequestVariableId),

    #[error("Duplicate environment '{1}' in {0}")]
    DuplicateEnvironment(DomainId, String),

    #[error("Cannot set {0} under {1}: the environment belongs to another domain")]
    ForeignEnvironment(VariableId, EnvironmentId),
}
