use anyhow::Result;
use log::trace;
use serde::Serialize;

use crate::host::{
    DomainId, DynamicString, EnvironmentId, GroupId, Host, HostError, RequestId,
    RequestVariableId, VariableId,
};

/// A [Host] that keeps every created object in memory.
///
/// Objects live in per-kind arenas and handles are indices into them. The whole graph can be
/// serialized, which is how the cli reports its result.
#[derive(Debug, Default, Serialize)]
pub struct Recorder {
    domains: Vec<DomainRecord>,
    environments: Vec<EnvironmentRecord>,
    variables: Vec<VariableRecord>,
    groups: Vec<GroupRecord>,
    requests: Vec<RequestRecord>,
    request_variables: Vec<RequestVariableRecord>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DomainRecord {
    pub name: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct EnvironmentRecord {
    pub domain: DomainId,
    pub name: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct VariableRecord {
    pub domain: DomainId,
    pub key: String,
    pub values: Vec<(EnvironmentId, DynamicString)>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct GroupRecord {
    pub name: String,
    pub children: Vec<RequestId>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct RequestRecord {
    pub name: String,
    pub method: String,
    pub url: DynamicString,
    pub description: String,
    pub variables: Vec<RequestVariableId>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct RequestVariableRecord {
    pub request: RequestId,
    pub name: String,
    pub value: DynamicString,
    pub description: String,
    pub schema: Option<String>,
}

impl Recorder {
    pub fn domains(&self) -> impl Iterator<Item = (DomainId, &DomainRecord)> {
        self.domains
            .iter()
            .enumerate()
            .map(|(i, record)| (DomainId(i), record))
    }

    /// All environments of `domain` in creation order.
    pub fn environments(
        &self,
        domain: DomainId,
    ) -> impl Iterator<Item = (EnvironmentId, &EnvironmentRecord)> {
        self.environments
            .iter()
            .enumerate()
            .filter(move |(_, record)| record.domain == domain)
            .map(|(i, record)| (EnvironmentId(i), record))
    }

    /// All variables of `domain` in creation order.
    pub fn variables(
        &self,
        domain: DomainId,
    ) -> impl Iterator<Item = (VariableId, &VariableRecord)> {
        self.variables
            .iter()
            .enumerate()
            .filter(move |(_, record)| record.domain == domain)
            .map(|(i, record)| (VariableId(i), record))
    }

    pub fn variable(&self, id: VariableId) -> Option<&VariableRecord> {
        self.variables.get(id.0)
    }

    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &GroupRecord)> {
        self.groups
            .iter()
            .enumerate()
            .map(|(i, record)| (GroupId(i), record))
    }

    pub fn group(&self, id: GroupId) -> Option<&GroupRecord> {
        self.groups.get(id.0)
    }

    pub fn request(&self, id: RequestId) -> Option<&RequestRecord> {
        self.requests.get(id.0)
    }

    pub fn request_variable(&self, id: RequestVariableId) -> Option<&RequestVariableRecord> {
        self.request_variables.get(id.0)
    }

    fn check_domain(&self, domain: DomainId) -> Result<(), HostError> {
        match self.domains.get(domain.0) {
            Some(_) => Ok(()),
            None => Err(HostError::UnknownDomain(domain)),
        }
    }
}

impl VariableRecord {
    /// The value held while `environment` is active.
    pub fn value(&self, environment: EnvironmentId) -> Option<&DynamicString> {
        self.values
            .iter()
            .find_map(|(env, value)| if *env == environment { Some(value) } else { None })
    }
}

impl Host for Recorder {
    fn create_environment_domain(&mut self, name: &str) -> Result<DomainId> {
        self.domains.push(DomainRecord {
            name: name.to_string(),
        });
        Ok(DomainId(self.domains.len() - 1))
    }

    fn create_environment(&mut self, domain: DomainId, name: &str) -> Result<EnvironmentId> {
        self.check_domain(domain)?;
        if self.environment_by_name(domain, name).is_some() {
            return Err(HostError::DuplicateEnvironment(domain, name.to_string()).into());
        }
        self.environments.push(EnvironmentRecord {
            domain,
            name: name.to_string(),
        });
        Ok(EnvironmentId(self.environments.len() - 1))
    }

    fn environment_by_name(&self, domain: DomainId, name: &str) -> Option<EnvironmentId> {
        self.environments(domain)
            .find(|(_, record)| record.name == name)
            .map(|(id, _)| id)
    }

    fn create_environment_variable(&mut self, domain: DomainId, key: &str) -> Result<VariableId> {
        self.check_domain(domain)?;
        self.variables.push(VariableRecord {
            domain,
            key: key.to_string(),
            values: vec![],
        });
        Ok(VariableId(self.variables.len() - 1))
    }

    fn set_variable_value(
        &mut self,
        variable: VariableId,
        value: DynamicString,
        environment: EnvironmentId,
    ) -> Result<()> {
        let env_domain = self
            .environments
            .get(environment.0)
            .ok_or(HostError::UnknownEnvironment(environment))?
            .domain;
        let record = self
            .variables
            .get_mut(variable.0)
            .ok_or(HostError::UnknownVariable(variable))?;
        if record.domain != env_domain {
            return Err(HostError::ForeignEnvironment(variable, environment).into());
        }
        trace!("{} '{}' set under {}", variable, record.key, environment);
        match record.values.iter_mut().find(|(env, _)| *env == environment) {
            Some((_, existing)) => *existing = value,
            None => record.values.push((environment, value)),
        }
        Ok(())
    }

    fn create_request_group(&mut self, name: &str) -> Result<GroupId> {
        self.groups.push(GroupRecord {
            name: name.to_string(),
            children: vec![],
        });
        Ok(GroupId(self.groups.len() - 1))
    }

    fn append_child(&mut self, group: GroupId, request: RequestId) -> Result<()> {
        if self.requests.get(request.0).is_none() {
            return Err(HostError::UnknownRequest(request).into());
        }
        self.groups
            .get_mut(group.0)
            .ok_or(HostError::UnknownGroup(group))?
            .children
            .push(request);
        Ok(())
    }

    fn create_request(
        &mut self,
        name: &str,
        method: &str,
        url: DynamicString,
        description: &str,
    ) -> Result<RequestId> {
        self.requests.push(RequestRecord {
            name: name.to_string(),
            method: method.to_string(),
            url,
            description: description.to_string(),
            variables: vec![],
        });
        Ok(RequestId(self.requests.len() - 1))
    }

    fn set_request_url(&mut self, request: RequestId, url: DynamicString) -> Result<()> {
        self.requests
            .get_mut(request.0)
            .ok_or(HostError::UnknownRequest(request))?
            .url = url;
        Ok(())
    }

    fn add_request_variable(
        &mut self,
        request: RequestId,
        name: &str,
        default: DynamicString,
        description: &str,
    ) -> Result<RequestVariableId> {
        let id = RequestVariableId(self.request_variables.len());
        self.requests
            .get_mut(request.0)
            .ok_or(HostError::UnknownRequest(request))?
            .variables
            .push(id);
        self.request_variables.push(RequestVariableRecord {
            request,
            name: name.to_string(),
            value: default,
            description: description.to_string(),
            schema: None,
        });
        Ok(id)
    }

    fn set_request_variable_schema(
        &mut self,
        variable: RequestVariableId,
        schema: &str,
    ) -> Result<()> {
        self.request_variables
            .get_mut(variable.0)
            .ok_or(HostError::UnknownRequestVariable(variable))?
            .schema = Some(schema.to_string());
        Ok(())
    }
}
