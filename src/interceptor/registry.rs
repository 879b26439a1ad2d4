//! Interceptor instantiation from serialized definitions
//!
//! Definitions are resolved against the registered factories first and
//! fall back to the owner's resolver. Definitions nobody can resolve are
//! dropped with a warning.

use super::{Interceptor, InterceptorSpec, LoggingInterceptor};
use crate::error::Result;
use crate::owner::Owner;
use dashmap::DashMap;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

pub type InterceptorFactory = Arc<dyn Fn(&Value) -> Result<Arc<dyn Interceptor>> + Send + Sync>;

/// Maps interceptor type tags to factories
#[derive(Clone, Default)]
pub struct InterceptorRegistry {
    factories: Arc<DashMap<String, InterceptorFactory>>,
}

impl InterceptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the interceptors shipped in this crate
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register(LoggingInterceptor::TYPE, |definition| {
            Ok(Arc::new(LoggingInterceptor::from_definition(definition)?) as Arc<dyn Interceptor>)
        });
        registry
    }

    pub fn register<F>(&self, type_name: impl Into<String>, factory: F)
    where
        F: Fn(&Value) -> Result<Arc<dyn Interceptor>> + Send + Sync + 'static,
    {
        self.factories.insert(type_name.into(), Arc::new(factory));
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Builds one interceptor from a definition.
    ///
    /// `Ok(None)` when neither a factory nor the owner knows the type.
    pub fn instantiate(
        &self,
        definition: &Value,
        owner: Option<&dyn Owner>,
    ) -> Result<Option<Arc<dyn Interceptor>>> {
        let definition = match definition {
            Value::String(type_name) => json!({ "type": type_name }),
            Value::Object(map) if map.get("type").is_some_and(Value::is_string) => {
                definition.clone()
            }
            other => {
                warn!(definition = %other, "Ignoring interceptor definition without type");
                return Ok(None);
            }
        };
        let type_name = definition["type"].as_str().unwrap_or_default();

        // Clone the factory out so no map guard is held while it runs
        let factory = self.factories.get(type_name).map(|f| f.value().clone());
        if let Some(factory) = factory {
            debug!(interceptor = type_name, "Creating interceptor from registry");
            return factory(&definition).map(Some);
        }

        if let Some(interceptor) = owner.and_then(|o| o.instantiate_interceptor(&definition)) {
            debug!(interceptor = type_name, "Interceptor created by owner");
            return Ok(Some(interceptor));
        }

        warn!(interceptor = type_name, "Unknown interceptor type, skipping");
        Ok(None)
    }

    /// Resolves a list of specs, keeping their order
    pub fn instantiate_all(
        &self,
        specs: &[InterceptorSpec],
        owner: Option<&dyn Owner>,
    ) -> Result<Vec<Arc<dyn Interceptor>>> {
        let mut interceptors = Vec::with_capacity(specs.len());
        for spec in specs {
            match spec {
                InterceptorSpec::Instance(interceptor) => interceptors.push(interceptor.clone()),
                InterceptorSpec::Definition(definition) => {
                    if let Some(interceptor) = self.instantiate(definition, owner)? {
                        interceptors.push(interceptor);
                    }
                }
            }
        }
        Ok(interceptors)
    }
}
