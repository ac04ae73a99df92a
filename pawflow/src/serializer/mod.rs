use anyhow::Result;
use log::info;

pub use config::Config;
pub use store::VariableStore;

use crate::host::Host;
use crate::model::Api;

mod config;
pub mod convert;
pub mod endpoint;
pub mod environment;
pub mod request;
mod store;

/// Writes an [Api] into the object model of a [Host].
pub trait Serializer {
    fn serialize(&self, host: &mut dyn Host, api: &Api) -> Result<()>;
}

/// Serializes into environment domains, request groups and requests.
///
/// Shared entities become environment variables first. Requests then refer to those variables
/// when building their urls.
#[derive(Debug, Default)]
pub struct Paw {
    config: Config,
}

impl Paw {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Serializer for Paw {
    fn serialize(&self, host: &mut dyn Host, api: &Api) -> Result<()> {
        info!("Creating environments...");
        let store = environment::create_environments(host, api, &self.config)?;
        info!("Created {} shared variables", store.len());

        info!("Creating requests...");
        let groups = request::create_requests(host, &store, api, &self.config)?;
        info!("Created {} request groups", groups.len());
        Ok(())
    }
}
