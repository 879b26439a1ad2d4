use super::registry::Teardown;
use super::Endpoint;
use crate::error::Result;
use futures::future::BoxFuture;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Async callable delivering a payload into an in-endpoint
pub struct Receiver {
    call: Box<dyn Fn(Value) -> BoxFuture<'static, Result<Value>> + Send + Sync>,
}

impl Receiver {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        Self {
            call: Box::new(move |payload| Box::pin(f(payload))),
        }
    }

    /// Wraps a synchronous function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Self::new(move |payload| {
            let f = f.clone();
            async move { f(payload) }
        })
    }

    pub fn call(&self, payload: Value) -> BoxFuture<'static, Result<Value>> {
        (self.call)(payload)
    }
}

impl fmt::Debug for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Receiver")
    }
}

/// Lifecycle hook run when a connection opens.
///
/// Called with `(endpoint, peer)`. The returned teardown is stored as the
/// connection's state and runs exactly once when the connection closes.
pub type DidConnect = Arc<dyn Fn(&Endpoint, &Endpoint) -> Option<Teardown> + Send + Sync>;
