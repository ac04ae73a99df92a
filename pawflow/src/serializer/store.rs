use indexmap::IndexMap;

use crate::host::VariableId;

/// The shared variables created for the [crate::model::Store] entities, keyed by the same ids.
///
/// Requests resolve their [crate::model::Reference]s against this.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct VariableStore {
    pub constraint: IndexMap<String, VariableId>,
    pub endpoint: IndexMap<String, VariableId>,
    pub parameter: IndexMap<String, VariableId>,
    pub auth: IndexMap<String, VariableId>,
    pub variable: IndexMap<String, VariableId>,
}

impl VariableStore {
    pub fn len(&self) -> usize {
        self.constraint.len()
            + self.endpoint.len()
            + self.parameter.len()
            + self.auth.len()
            + self.variable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves every slot entry of `other` into `self`. Ids are unique across slots, so nothing is
    /// overwritten in practice.
    pub fn merge(&mut self, other: VariableStore) {
        self.constraint.extend(other.constraint);
        self.endpoint.extend(other.endpoint);
        self.parameter.extend(other.parameter);
        self.auth.extend(other.auth);
        self.variable.extend(other.variable);
    }

    pub fn endpoint(&self, id: &str) -> Option<VariableId> {
        self.endpoint.get(id).copied()
    }
}
