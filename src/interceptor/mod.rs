//! Interceptor pipeline
//!
//! Interceptors are middleware units placed on a send endpoint. Each one
//! receives the payload together with a [`Next`] continuation and either
//! forwards (possibly transformed) by running `next`, or answers on its own.
//!
//! # Modules
//!
//! - `chain`: continuation type and ordered dispatch
//! - `registry`: type tag to factory mapping used to build interceptors
//!   from serialized definitions
//! - `logging`: pass-through interceptor tracing every payload

pub mod chain;
pub mod logging;
pub mod registry;

pub use chain::Next;
pub use logging::LoggingInterceptor;
pub use registry::{InterceptorFactory, InterceptorRegistry};

use crate::endpoint::{Endpoint, JsonOptions};
use crate::error::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;

#[async_trait]
pub trait Interceptor: Send + Sync {
    /// Type tag, as used in serialized definitions
    fn type_name(&self) -> &str;

    fn to_json(&self, _options: &JsonOptions) -> Value {
        json!({ "type": self.type_name() })
    }

    /// Handle one payload on behalf of `endpoint`.
    ///
    /// Run `next` to continue down the chain; returning without running it
    /// short-circuits the send.
    async fn receive(&self, endpoint: &Endpoint, next: Next<'_>, payload: Value) -> Result<Value>;
}

/// Interceptor as handed to an endpoint: ready-made or still a definition
#[derive(Clone)]
pub enum InterceptorSpec {
    Instance(Arc<dyn Interceptor>),
    /// Type tag string or `{ "type": tag, ...config }`
    Definition(Value),
}

impl InterceptorSpec {
    /// Accepts `null`, a single definition or an array of definitions
    pub fn list_from_value(value: &Value) -> Vec<Self> {
        match value {
            Value::Null => Vec::new(),
            Value::Array(items) => items.iter().cloned().map(Self::Definition).collect(),
            other => vec![Self::Definition(other.clone())],
        }
    }
}

impl From<Arc<dyn Interceptor>> for InterceptorSpec {
    fn from(interceptor: Arc<dyn Interceptor>) -> Self {
        Self::Instance(interceptor)
    }
}

impl From<Value> for InterceptorSpec {
    fn from(definition: Value) -> Self {
        Self::Definition(definition)
    }
}

impl From<&str> for InterceptorSpec {
    fn from(type_name: &str) -> Self {
        Self::Definition(Value::String(type_name.to_string()))
    }
}

impl fmt::Debug for InterceptorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(i) => write!(f, "Instance({})", i.type_name()),
            Self::Definition(d) => write!(f, "Definition({d})"),
        }
    }
}
