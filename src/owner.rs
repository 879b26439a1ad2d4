//! Owner collaborator
//!
//! Services and steps own their endpoints. The endpoint core only needs
//! an owner to format identifiers and to resolve interceptor definitions
//! it has no factory for.

use crate::endpoint::Endpoint;
use crate::interceptor::Interceptor;
use serde_json::Value;
use std::sync::Arc;

pub trait Owner: Send + Sync {
    fn name(&self) -> String;

    /// Identifier used when presenting an endpoint of this owner.
    /// `None` hides the endpoint from identifier listings.
    fn endpoint_identifier(&self, endpoint: &Endpoint) -> Option<String> {
        Some(format!("{}.{}", self.name(), endpoint.name()))
    }

    /// Creates an interceptor from a serialized definition
    /// (`{ "type": ..., ...config }`). `None` if the type is unknown.
    fn instantiate_interceptor(&self, _definition: &Value) -> Option<Arc<dyn Interceptor>> {
        None
    }
}

/// Owner that is nothing but a name
#[derive(Debug, Clone)]
pub struct NamedOwner {
    name: String,
}

impl NamedOwner {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn shared(name: impl Into<String>) -> Arc<dyn Owner> {
        Arc::new(Self::new(name))
    }
}

impl Owner for NamedOwner {
    fn name(&self) -> String {
        self.name.clone()
    }
}
