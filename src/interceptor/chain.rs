//! Interceptor chain execution
//!
//! Calling `next` at position `k` hands the payload to interceptor `k`
//! with a continuation for `k + 1`; past the last interceptor the payload
//! is delivered to the target endpoint's receiver.

use super::Interceptor;
use crate::endpoint::Endpoint;
use crate::error::Result;
use futures::future::BoxFuture;
use serde_json::Value;
use std::sync::Arc;
use tracing::trace;

/// Continuation handed to an interceptor.
///
/// Running it consumes it, so each position of the chain is entered at
/// most once per send.
pub struct Next<'a> {
    endpoint: &'a Endpoint,
    remaining: &'a [Arc<dyn Interceptor>],
    target: &'a Endpoint,
}

impl<'a> Next<'a> {
    pub(crate) fn new(
        endpoint: &'a Endpoint,
        chain: &'a [Arc<dyn Interceptor>],
        target: &'a Endpoint,
    ) -> Self {
        Self {
            endpoint,
            remaining: chain,
            target,
        }
    }

    /// Number of interceptors still ahead of the receiver
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Endpoint the payload will finally be delivered to
    pub fn target(&self) -> &Endpoint {
        self.target
    }

    pub fn run(self, payload: Value) -> BoxFuture<'a, Result<Value>> {
        Box::pin(async move {
            match self.remaining.split_first() {
                Some((interceptor, rest)) => {
                    trace!(
                        endpoint = %self.endpoint,
                        interceptor = interceptor.type_name(),
                        "Entering interceptor"
                    );
                    let next = Next {
                        endpoint: self.endpoint,
                        remaining: rest,
                        target: self.target,
                    };
                    interceptor.receive(self.endpoint, next, payload).await
                }
                None => self.target.receive(payload).await,
            }
        })
    }
}

/// Runs `payload` through `chain` on behalf of `endpoint` into `target`.
///
/// The chain is a snapshot; replacing the endpoint's interceptors while
/// this runs does not affect it.
pub(crate) async fn dispatch(
    endpoint: &Endpoint,
    chain: Arc<Vec<Arc<dyn Interceptor>>>,
    target: &Endpoint,
    payload: Value,
) -> Result<Value> {
    Next::new(endpoint, &chain, target).run(payload).await
}
