//! Directional in-process endpoints
//!
//! Endpoints are linked into send/receive pairs, keep the connection
//! bookkeeping on both sides, run lifecycle hooks when links open and
//! close, and pass every sent payload through an interceptor pipeline.
//!
//! # Modules
//!
//! - `endpoint`: the endpoint handle, its kinds and connection protocol
//! - `interceptor`: interceptor trait, chain execution and factories
//! - `owner`: the collaborator owning endpoints
//! - `config` / `wiring`: declarative endpoint meshes
//! - `commands`: entry points used by the binary

pub mod commands;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod interceptor;
pub mod owner;
pub mod wiring;

#[cfg(test)]
mod test_utils;

pub use endpoint::{Endpoint, EndpointKind, EndpointOptions, LinkState, Receiver};
pub use error::{EndpointError, Result};
pub use interceptor::{Interceptor, InterceptorRegistry, InterceptorSpec, Next};
pub use owner::{NamedOwner, Owner};
