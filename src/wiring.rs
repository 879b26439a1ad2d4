//! Endpoint meshes built from configuration
//!
//! A [`Wiring`] creates the endpoints one owner declares and performs the
//! declared connections between them. Dropping it removes every
//! connection again, so the peers release each other.

use crate::config::{self, WiringConfig};
use crate::endpoint::{Endpoint, EndpointOptions, JsonOptions};
use crate::error::{ConfigError, Result};
use crate::interceptor::InterceptorRegistry;
use crate::owner::{NamedOwner, Owner};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

pub struct Wiring {
    owner: Arc<dyn Owner>,
    endpoints: Vec<Endpoint>,
    json: JsonOptions,
}

impl Wiring {
    pub fn build(config: &WiringConfig, registry: &InterceptorRegistry) -> Result<Self> {
        config::validate(config)?;

        let owner = NamedOwner::shared(&config.owner);
        let mut wiring = Self {
            owner: owner.clone(),
            endpoints: Vec::with_capacity(config.endpoints.len()),
            json: config.json,
        };

        for declared in &config.endpoints {
            let mut options = EndpointOptions::default()
                .with_owner(owner.clone())
                .with_registry(registry.clone())
                .with_interceptors(declared.interceptors.iter().cloned());
            if declared.create_opposite {
                options = options.create_opposite();
            }

            let endpoint = Endpoint::new(&declared.name, declared.endpoint_kind(), options)?;
            debug!(
                endpoint = %endpoint.identifier(),
                kind = ?declared.kind,
                interceptors = endpoint.interceptors().len(),
                "Endpoint created"
            );
            wiring.endpoints.push(endpoint);
        }

        for declared in &config.endpoints {
            let Some(target) = &declared.connected else {
                continue;
            };
            let from = wiring.require(&declared.name)?;
            let to = wiring.require(target)?;
            from.add_connection(&to)?;
        }

        info!(
            owner = %config.owner,
            endpoints = wiring.endpoints.len(),
            "Wiring built"
        );
        Ok(wiring)
    }

    fn require(&self, name: &str) -> Result<Endpoint> {
        self.get(name).cloned().ok_or_else(|| {
            ConfigError::Validation(format!("Unknown endpoint '{name}'")).into()
        })
    }

    pub fn owner(&self) -> &Arc<dyn Owner> {
        &self.owner
    }

    pub fn get(&self, name: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.name() == name)
    }

    /// Endpoints in declaration order
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// `{ name: endpoint json }` for every endpoint
    pub fn describe(&self) -> Value {
        let described: Map<String, Value> = self
            .endpoints
            .iter()
            .map(|e| (e.name().to_string(), e.to_json_with_options(&self.json)))
            .collect();
        Value::Object(described)
    }

    pub fn teardown(&self) {
        for endpoint in &self.endpoints {
            endpoint.remove_all_connections();
        }
        debug!(owner = %self.owner.name(), "Wiring torn down");
    }
}

impl Drop for Wiring {
    fn drop(&mut self) {
        self.teardown();
    }
}
