use anyhow::Result;
use indexmap::IndexMap;
use log::{debug, trace};

use crate::host::{DomainId, DynamicString, EnvironmentId, Host, VariableId};
use crate::model::{Api, Variable};
use crate::serializer::convert::{auth_value, endpoint_template, schema_of};
use crate::serializer::{Config, VariableStore};

/// Creates the standard and variable environment domains and returns the handles of every shared
/// variable created in them. A domain is only created when it would hold at least one variable.
pub fn create_environments(
    host: &mut dyn Host,
    api: &Api,
    config: &Config,
) -> Result<VariableStore> {
    let mut store = build_standard_domain(host, api, config)?;
    store.merge(build_variable_domain(host, api, config)?);
    Ok(store)
}

pub fn title<'a>(api: &'a Api, config: &'a Config) -> &'a str {
    api.title().unwrap_or(&config.default_title)
}

/// One domain with a single environment holding every constraint, endpoint, parameter and auth.
pub fn build_standard_domain(
    host: &mut dyn Host,
    api: &Api,
    config: &Config,
) -> Result<VariableStore> {
    let size = api.store.standard_len();
    if size == 0 {
        debug!("no shared entities, skipping standard environment domain");
        return Ok(VariableStore::default());
    }

    let name = title(api, config);
    debug!("creating environment domain '{}' for {} entities", name, size);
    let domain = host.create_environment_domain(name)?;
    let environment = host.create_environment(domain, &config.default_environment)?;
    let mut writer = DomainWriter {
        host,
        domain,
        environment,
    };

    let store = &api.store;
    Ok(VariableStore {
        constraint: writer.add_all(&store.constraint, |c| schema_of(c))?,
        endpoint: writer.add_all(&store.endpoint, |e| endpoint_template(e, config))?,
        parameter: writer.add_all(&store.parameter, |p| schema_of(p))?,
        auth: writer.add_all(&store.auth, auth_value)?,
        ..Default::default()
    })
}

/// One domain holding every user-defined [Variable], with one environment per context name.
pub fn build_variable_domain(
    host: &mut dyn Host,
    api: &Api,
    config: &Config,
) -> Result<VariableStore> {
    if api.store.variable.is_empty() {
        debug!("no variables, skipping variable environment domain");
        return Ok(VariableStore::default());
    }

    let name = format!("{}{}", config.variable_domain_prefix, title(api, config));
    debug!("creating environment domain '{}'", name);
    let domain = host.create_environment_domain(&name)?;

    let mut variable = IndexMap::new();
    for (key, value) in &api.store.variable {
        let id = add_variable(host, domain, key, value)?;
        variable.insert(key.clone(), id);
    }
    Ok(VariableStore {
        variable,
        ..Default::default()
    })
}

fn add_variable(
    host: &mut dyn Host,
    domain: DomainId,
    key: &str,
    variable: &Variable,
) -> Result<VariableId> {
    let id = host.create_environment_variable(domain, key)?;
    trace!("variable '{}' has {} contexts", key, variable.values.len());
    for (env_name, value) in &variable.values {
        let environment = ensure_environment(host, domain, env_name)?;
        host.set_variable_value(id, DynamicString::from(value.as_str()), environment)?;
    }
    Ok(id)
}

/// Returns the environment named `name` in `domain`, creating it on first use.
pub fn ensure_environment(
    host: &mut dyn Host,
    domain: DomainId,
    name: &str,
) -> Result<EnvironmentId> {
    match host.environment_by_name(domain, name) {
        Some(environment) => Ok(environment),
        None => {
            debug!("creating environment '{}'", name);
            host.create_environment(domain, name)
        }
    }
}

/// Writes single-valued variables into one environment of one domain.
struct DomainWriter<'a> {
    host: &'a mut dyn Host,
    domain: DomainId,
    environment: EnvironmentId,
}

impl DomainWriter<'_> {
    fn add(&mut self, key: &str, value: DynamicString) -> Result<VariableId> {
        trace!("adding shared variable '{}'", key);
        let variable = self.host.create_environment_variable(self.domain, key)?;
        self.host
            .set_variable_value(variable, value, self.environment)?;
        Ok(variable)
    }

    fn add_all<T>(
        &mut self,
        entities: &IndexMap<String, T>,
        convert: impl Fn(&T) -> DynamicString,
    ) -> Result<IndexMap<String, VariableId>> {
        let mut ids = IndexMap::with_capacity(entities.len());
        for (key, entity) in entities {
            ids.insert(key.clone(), self.add(key, convert(entity))?);
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::host::{DynamicString, Host, Recorder};
    use crate::model::{Api, Auth, Constraint, Parameter, Url, Variable};
    use crate::serializer::convert::{endpoint_template, schema_of};
    use crate::serializer::environment::{
        build_standard_domain, build_variable_domain, create_environments, ensure_environment,
    };
    use crate::serializer::Config;

    fn standard_api() -> Result<Api> {
        let mut api = Api::default();
        api.info.title = Some("Petstore".to_string());
        let store = &mut api.store;
        store
            .constraint
            .insert("c0".to_string(), Constraint::Minimum(0.0));
        store
            .endpoint
            .insert("e0".to_string(), Url::new(&["https:"], "pets.io")?);
        store
            .parameter
            .insert("p0".to_string(), Parameter::default());
        store
            .auth
            .insert("a0".to_string(), Auth::basic("user", "pass"));
        store.auth.insert("a1".to_string(), Auth::Negotiate);
        Ok(api)
    }

    fn variable_api() -> Api {
        let mut api = Api::default();
        api.store.variable.insert(
            "host".to_string(),
            Variable::new([("prod", "a.com"), ("staging", "b.com")]),
        );
        api.store
            .variable
            .insert("token".to_string(), Variable::new([("staging", "t")]));
        api
    }

    mod create_environments {
        use super::*;

        #[test]
        fn empty_api_creates_nothing() -> Result<()> {
            let mut host = Recorder::default();
            let store = create_environments(&mut host, &Api::default(), &Config::default())?;
            assert!(store.is_empty());
            assert_eq!(host.domains().count(), 0);
            Ok(())
        }

        #[test]
        fn merges_both_domains() -> Result<()> {
            let mut host = Recorder::default();
            let mut api = standard_api()?;
            api.store.variable = variable_api().store.variable;
            let store = create_environments(&mut host, &api, &Config::default())?;
            assert_eq!(store.len(), 7);
            let names = host
                .domains()
                .map(|(_, d)| d.name.as_str())
                .collect::<Vec<_>>();
            assert_eq!(names, vec!["Petstore", "Vars - Petstore"]);
            Ok(())
        }
    }

    mod standard {
        use super::*;

        #[test]
        fn one_domain_with_default_environment() -> Result<()> {
            let mut host = Recorder::default();
            let api = standard_api()?;
            let store = build_standard_domain(&mut host, &api, &Config::default())?;

            let (domain, record) = host.domains().next().unwrap();
            assert_eq!(host.domains().count(), 1);
            assert_eq!(record.name, "Petstore");
            let environments = host.environments(domain).collect::<Vec<_>>();
            assert_eq!(environments.len(), 1);
            assert_eq!(environments[0].1.name, "Default");
            let default_env = environments[0].0;

            assert_eq!(host.variables(domain).count(), 5);
            for (_, variable) in host.variables(domain) {
                assert_eq!(variable.values.len(), 1);
                assert!(variable.value(default_env).is_some());
            }
            assert!(store.variable.is_empty());
            assert_eq!(store.len(), 5);
            Ok(())
        }

        #[test]
        fn values_are_converted() -> Result<()> {
            let mut host = Recorder::default();
            let api = standard_api()?;
            let config = Config::default();
            let store = build_standard_domain(&mut host, &api, &config)?;
            let env = host.environment_by_name(host.domains().next().unwrap().0, "Default");
            let env = env.unwrap();

            let value = |id| host.variable(id).unwrap().value(env).cloned();
            assert_eq!(
                value(store.constraint["c0"]),
                Some(schema_of(&Constraint::Minimum(0.0)))
            );
            assert_eq!(
                value(store.endpoint["e0"]),
                Some(endpoint_template(&api.store.endpoint["e0"], &config))
            );
            assert_eq!(value(store.auth["a1"]), Some(DynamicString::default()));
            assert_eq!(host.variable(store.auth["a0"]).unwrap().key, "a0");
            Ok(())
        }

        #[test]
        fn untitled_api_uses_default_name() -> Result<()> {
            let mut host = Recorder::default();
            let mut api = standard_api()?;
            api.info.title = None;
            build_standard_domain(&mut host, &api, &Config::default())?;
            assert_eq!(host.domains().next().unwrap().1.name, "Imports");
            Ok(())
        }

        #[test]
        fn variables_only_skips_standard_domain() -> Result<()> {
            let mut host = Recorder::default();
            let store = build_standard_domain(&mut host, &variable_api(), &Config::default())?;
            assert!(store.is_empty());
            assert_eq!(host.domains().count(), 0);
            Ok(())
        }
    }

    mod variables {
        use super::*;

        #[test]
        fn one_environment_per_context() -> Result<()> {
            let mut host = Recorder::default();
            let store = build_variable_domain(&mut host, &variable_api(), &Config::default())?;

            let (domain, record) = host.domains().next().unwrap();
            assert_eq!(record.name, "Vars - Imports");
            let env_names = host
                .environments(domain)
                .map(|(_, e)| e.name.as_str())
                .collect::<Vec<_>>();
            assert_eq!(env_names, vec!["prod", "staging"]);

            let prod = host.environment_by_name(domain, "prod").unwrap();
            let staging = host.environment_by_name(domain, "staging").unwrap();
            let var = host.variable(store.variable["host"]).unwrap();
            assert_eq!(var.values.len(), 2);
            assert_eq!(var.value(prod), Some(&DynamicString::from("a.com")));
            assert_eq!(var.value(staging), Some(&DynamicString::from("b.com")));

            let token = host.variable(store.variable["token"]).unwrap();
            assert_eq!(token.value(staging), Some(&DynamicString::from("t")));
            assert_eq!(token.value(prod), None);
            Ok(())
        }

        #[test]
        fn no_variables_skips_domain() -> Result<()> {
            let mut host = Recorder::default();
            let store = build_variable_domain(&mut host, &standard_api()?, &Config::default())?;
            assert!(store.is_empty());
            assert_eq!(host.domains().count(), 0);
            Ok(())
        }

        #[test]
        fn ensure_environment_reuses() -> Result<()> {
            let mut host = Recorder::default();
            let domain = host.create_environment_domain("vars")?;
            let first = ensure_environment(&mut host, domain, "prod")?;
            let second = ensure_environment(&mut host, domain, "prod")?;
            assert_eq!(first, second);
            assert_eq!(host.environments(domain).count(), 1);
            Ok(())
        }
    }
}
