//! Interceptors and helpers shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use endpoint_link::endpoint::{Endpoint, EndpointOptions, Receiver};
use endpoint_link::interceptor::{Interceptor, Next};
use endpoint_link::owner::NamedOwner;
use endpoint_link::{EndpointError, Result};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

pub fn owned(owner: &str) -> EndpointOptions {
    EndpointOptions::default().with_owner(NamedOwner::shared(owner))
}

pub fn numeric(payload: &Value) -> i64 {
    payload.as_i64().unwrap_or_default()
}

/// Receiver applying `f` to numeric payloads
pub fn numeric_receiver(f: impl Fn(i64) -> i64 + Send + Sync + 'static) -> Receiver {
    Receiver::from_fn(move |payload| Ok(json!(f(numeric(&payload)))))
}

/// Adds `offset` to the payload before handing it on
pub struct PlusInterceptor {
    pub offset: i64,
}

impl PlusInterceptor {
    pub fn shared(offset: i64) -> Arc<dyn Interceptor> {
        Arc::new(Self { offset })
    }
}

#[async_trait]
impl Interceptor for PlusInterceptor {
    fn type_name(&self) -> &str {
        "plus"
    }

    async fn receive(&self, _endpoint: &Endpoint, next: Next<'_>, payload: Value) -> Result<Value> {
        next.run(json!(numeric(&payload) + self.offset)).await
    }
}

/// Appends a marker to string payloads, in order of traversal
pub struct TagInterceptor(pub &'static str);

#[async_trait]
impl Interceptor for TagInterceptor {
    fn type_name(&self) -> &str {
        "tag"
    }

    async fn receive(&self, _endpoint: &Endpoint, next: Next<'_>, payload: Value) -> Result<Value> {
        let tagged = format!("{}{}", payload.as_str().unwrap_or_default(), self.0);
        next.run(json!(tagged)).await
    }
}

/// Answers on its own without running `next`
pub struct CacheInterceptor {
    pub answer: Value,
}

#[async_trait]
impl Interceptor for CacheInterceptor {
    fn type_name(&self) -> &str {
        "cache"
    }

    async fn receive(
        &self,
        _endpoint: &Endpoint,
        _next: Next<'_>,
        _payload: Value,
    ) -> Result<Value> {
        Ok(self.answer.clone())
    }
}

/// Refuses every payload
pub struct RateLimitInterceptor;

#[async_trait]
impl Interceptor for RateLimitInterceptor {
    fn type_name(&self) -> &str {
        "rate-limit"
    }

    async fn receive(
        &self,
        _endpoint: &Endpoint,
        _next: Next<'_>,
        _payload: Value,
    ) -> Result<Value> {
        Err(anyhow::anyhow!("rate limit exceeded").into())
    }
}

/// Parks each payload until released, then adds 100
pub struct GateInterceptor {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

#[async_trait]
impl Interceptor for GateInterceptor {
    fn type_name(&self) -> &str {
        "gate"
    }

    async fn receive(&self, _endpoint: &Endpoint, next: Next<'_>, payload: Value) -> Result<Value> {
        self.entered.notify_one();
        self.release.notified().await;
        next.run(json!(numeric(&payload) + 100)).await
    }
}

/// Receiver counting its calls; echoes, or fails when `fail` is set
pub fn counting_receiver(calls: &Arc<AtomicUsize>, fail: bool) -> Receiver {
    let calls = calls.clone();
    Receiver::from_fn(move |payload| {
        calls.fetch_add(1, Ordering::SeqCst);
        if fail {
            Err(EndpointError::Rejected("failing receiver".into()))
        } else {
            Ok(payload)
        }
    })
}
