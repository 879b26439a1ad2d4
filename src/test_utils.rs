#[cfg(test)]
use crate::endpoint::{Endpoint, JsonOptions, Teardown};
#[cfg(test)]
use crate::error::Result;
#[cfg(test)]
use crate::interceptor::{Interceptor, Next};
#[cfg(test)]
use async_trait::async_trait;
#[cfg(test)]
use serde_json::{json, Value};
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};
#[cfg(test)]
use std::sync::{Arc, Mutex};

/// Adds a fixed offset to numeric payloads before passing them on
#[cfg(test)]
pub struct AddInterceptor(pub i64);

#[cfg(test)]
#[async_trait]
impl Interceptor for AddInterceptor {
    fn type_name(&self) -> &str {
        "add"
    }

    fn to_json(&self, _options: &JsonOptions) -> Value {
        json!({ "type": "add" })
    }

    async fn receive(&self, _endpoint: &Endpoint, next: Next<'_>, payload: Value) -> Result<Value> {
        let value = payload.as_i64().unwrap_or_default();
        next.run(json!(value + self.0)).await
    }
}

/// Appends its name to a shared log, then forwards unchanged
#[cfg(test)]
pub struct RecordingInterceptor {
    name: &'static str,
    seen: Arc<Mutex<Vec<&'static str>>>,
}

#[cfg(test)]
impl RecordingInterceptor {
    pub fn new(name: &'static str, seen: Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self { name, seen }
    }
}

#[cfg(test)]
#[async_trait]
impl Interceptor for RecordingInterceptor {
    fn type_name(&self) -> &str {
        self.name
    }

    async fn receive(&self, _endpoint: &Endpoint, next: Next<'_>, payload: Value) -> Result<Value> {
        self.seen.lock().unwrap().push(self.name);
        next.run(payload).await
    }
}

/// Counts `did_connect` calls and the teardowns they hand out
#[cfg(test)]
#[derive(Clone, Default)]
pub struct HookCounts {
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
}

#[cfg(test)]
impl HookCounts {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
pub fn counting_hook(
    counts: &HookCounts,
) -> impl Fn(&Endpoint, &Endpoint) -> Option<Teardown> + Send + Sync + 'static {
    let counts = counts.clone();
    move |_endpoint: &Endpoint, _peer: &Endpoint| -> Option<Teardown> {
        counts.opened.fetch_add(1, Ordering::SeqCst);
        let closed = counts.closed.clone();
        Some(Box::new(move || {
            closed.fetch_add(1, Ordering::SeqCst);
        }))
    }
}
