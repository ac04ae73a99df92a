use std::fmt::{Display, Formatter};

use anyhow::Result;
use serde::Serialize;

pub use error::HostError;
pub use recorder::Recorder;
pub use value::{DynamicString, DynamicValue, Piece, RecordParameter};

mod error;
pub mod recorder;
mod value;

macro_rules! handle {
    ($name: ident, $label: literal) => {
        /// An opaque handle to an object created by a [Host].
        #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
        pub struct $name(pub usize);

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", $label, self.0)
            }
        }
    };
}

handle!(DomainId, "domain");
handle!(EnvironmentId, "environment");
handle!(VariableId, "variable");
handle!(GroupId, "group");
handle!(RequestId, "request");
handle!(RequestVariableId, "request-variable");

/// The object model of the API client application the serializer writes into.
///
/// The serializer only ever writes through this interface. The one read,
/// [Host::environment_by_name], exists so environments can be reused instead of duplicated.
/// Failures are propagated to the caller unmodified.
pub trait Host {
    /// Creates a named container of shared variables.
    fn create_environment_domain(&mut self, name: &str) -> Result<DomainId>;

    /// Creates a named context within `domain` under which variables can hold a value.
    fn create_environment(&mut self, domain: DomainId, name: &str) -> Result<EnvironmentId>;

    fn environment_by_name(&self, domain: DomainId, name: &str) -> Option<EnvironmentId>;

    fn create_environment_variable(&mut self, domain: DomainId, key: &str) -> Result<VariableId>;

    /// Assigns the value `variable` holds while `environment` is active.
    fn set_variable_value(
        &mut self,
        variable: VariableId,
        value: DynamicString,
        environment: EnvironmentId,
    ) -> Result<()>;

    fn create_request_group(&mut self, name: &str) -> Result<GroupId>;

    fn append_child(&mut self, group: GroupId, request: RequestId) -> Result<()>;

    fn create_request(
        &mut self,
        name: &str,
        method: &str,
        url: DynamicString,
        description: &str,
    ) -> Result<RequestId>;

    fn set_request_url(&mut self, request: RequestId, url: DynamicString) -> Result<()>;

    /// Adds a value local to `request` that the user can switch between alternatives.
    fn add_request_variable(
        &mut self,
        request: RequestId,
        name: &str,
        default: DynamicString,
        description: &str,
    ) -> Result<RequestVariableId>;

    /// Attaches a JSON schema (as a string) restricting the values of a request variable.
    fn set_request_variable_schema(
        &mut self,
        variable: RequestVariableId,
        schema: &str,
    ) -> Result<()>;
}

impl VariableId {
    /// A value that evaluates to whatever this variable holds in the active environment.
    pub fn reference_value(self) -> DynamicValue {
        DynamicValue::EnvironmentVariable { variable: self }
    }
}

impl RequestVariableId {
    pub fn reference_value(self) -> DynamicValue {
        DynamicValue::RequestVariable { variable: self }
    }
}
