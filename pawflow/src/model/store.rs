use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{Auth, Constraint, Parameter, Url, Variable};

/// Entities shared across the [crate::model::Api], grouped by kind and keyed by a unique id.
///
/// Iteration order of each slot is insertion order.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Store {
    pub constraint: IndexMap<String, Constraint>,
    pub endpoint: IndexMap<String, Url>,
    pub parameter: IndexMap<String, Parameter>,
    pub auth: IndexMap<String, Auth>,
    pub variable: IndexMap<String, Variable>,
}

impl Store {
    /// Number of entities that share a single value regardless of environment, i.e. everything
    /// except [Store::variable].
    pub fn standard_len(&self) -> usize {
        self.constraint.len() + self.endpoint.len() + self.auth.len() + self.parameter.len()
    }
}
