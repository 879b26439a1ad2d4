//! Endpoints and their connection protocol
//!
//! An [`Endpoint`] is a named, owned node with a role. Compatible
//! endpoints are linked with [`Endpoint::add_connection`]; both sides
//! record each other, and once the receiving side of a link has a
//! receiver the link opens and each side's `did_connect` hook runs.
//! [`Endpoint::send`] walks the interceptor chain and delivers into the
//! connected receiver.
//!
//! # Modules
//!
//! - `kind`: capability record selecting the endpoint variant
//! - `registry`: single-slot and map-backed connection registries
//! - `receiver`: receive callable and lifecycle hook types
//! - `json`: presentation for introspection

pub mod json;
pub mod kind;
pub mod receiver;
pub mod registry;

pub use json::{Connected, EndpointJson, JsonOptions};
pub use kind::{Direction, EndpointKind, PeerLimit};
pub use receiver::{DidConnect, Receiver};
pub use registry::{LinkState, Teardown};

use crate::error::{EndpointError, Result};
use crate::interceptor::{chain, Interceptor, InterceptorRegistry, InterceptorSpec};
use crate::owner::Owner;
use arc_swap::{ArcSwap, ArcSwapOption};
use futures::future::join_all;
use registry::{ConnectionRegistry, Insert, OpenOutcome};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, Weak};
use tracing::{debug, error, warn};

static NEXT_ENDPOINT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique endpoint identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndpointId(u64);

impl EndpointId {
    fn next() -> Self {
        Self(NEXT_ENDPOINT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

enum Opposite {
    /// Created alongside this endpoint and kept alive by it
    Owned(Endpoint),
    Linked(Weak<EndpointInner>),
}

struct EndpointInner {
    id: EndpointId,
    name: String,
    owner: Option<Arc<dyn Owner>>,
    kind: EndpointKind,
    connections: Box<dyn ConnectionRegistry>,
    interceptors: ArcSwap<Vec<Arc<dyn Interceptor>>>,
    receiver: ArcSwapOption<Receiver>,
    did_connect: Option<DidConnect>,
    opposite: OnceLock<Opposite>,
}

/// Construction options for [`Endpoint::new`]
#[derive(Default)]
pub struct EndpointOptions {
    owner: Option<Arc<dyn Owner>>,
    receive: Option<Receiver>,
    did_connect: Option<DidConnect>,
    interceptors: Vec<InterceptorSpec>,
    registry: Option<InterceptorRegistry>,
    connected: Option<Endpoint>,
    opposite: Option<Endpoint>,
    create_opposite: bool,
}

impl EndpointOptions {
    pub fn with_owner(mut self, owner: Arc<dyn Owner>) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_receive(mut self, receiver: Receiver) -> Self {
        self.receive = Some(receiver);
        self
    }

    pub fn with_did_connect<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Endpoint, &Endpoint) -> Option<Teardown> + Send + Sync + 'static,
    {
        self.did_connect = Some(Arc::new(hook));
        self
    }

    pub fn with_interceptors<I, S>(mut self, interceptors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<InterceptorSpec>,
    {
        self.interceptors = interceptors.into_iter().map(Into::into).collect();
        self
    }

    /// Factories used for interceptor definitions
    pub fn with_registry(mut self, registry: InterceptorRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Connect to `peer` as the last construction step
    pub fn connected_to(mut self, peer: &Endpoint) -> Self {
        self.connected = Some(peer.clone());
        self
    }

    /// Pair with an existing endpoint going the other way
    pub fn with_opposite(mut self, opposite: &Endpoint) -> Self {
        self.opposite = Some(opposite.clone());
        self
    }

    /// Create the endpoint going the other way along with this one
    pub fn create_opposite(mut self) -> Self {
        self.create_opposite = true;
        self
    }
}

/// Opens that have to wait until both sides of a link are recorded
#[derive(Default)]
struct DeferredOpens {
    pending: Vec<(Endpoint, Endpoint)>,
}

impl DeferredOpens {
    fn push(&mut self, endpoint: &Endpoint, peer: &Endpoint) {
        self.pending.push((endpoint.clone(), peer.clone()));
    }

    fn flush(self) -> Result<()> {
        for (endpoint, peer) in self.pending {
            endpoint.open_connection(&peer)?;
        }
        Ok(())
    }
}

/// Handle to a named, owned endpoint. Clones refer to the same endpoint.
#[derive(Clone)]
pub struct Endpoint {
    inner: Arc<EndpointInner>,
}

impl Endpoint {
    pub fn new(
        name: impl Into<String>,
        kind: EndpointKind,
        options: EndpointOptions,
    ) -> Result<Self> {
        let name = name.into();
        if options.opposite.is_some() && options.create_opposite {
            return Err(EndpointError::OppositeAlreadyAssigned(name));
        }
        let owner = options.owner;

        let interceptors = options
            .registry
            .unwrap_or_else(InterceptorRegistry::with_builtins)
            .instantiate_all(&options.interceptors, owner.as_deref())?;

        if options.receive.is_some() && !kind.is_in {
            return Err(EndpointError::Unsupported {
                endpoint: name,
                operation: "receive",
            });
        }

        let endpoint = Self {
            inner: Arc::new(EndpointInner {
                id: EndpointId::next(),
                name,
                owner,
                kind,
                connections: registry::for_limit(kind.max_peers),
                interceptors: ArcSwap::from_pointee(interceptors),
                receiver: ArcSwapOption::from(options.receive.map(Arc::new)),
                did_connect: options.did_connect,
                opposite: OnceLock::new(),
            }),
        };

        if let Some(opposite) = options.opposite {
            endpoint.link_opposite(&opposite)?;
        } else if options.create_opposite {
            let mut opposite_options = EndpointOptions::default();
            opposite_options.owner = endpoint.inner.owner.clone();
            let opposite = Endpoint::new(endpoint.name(), kind.opposite(), opposite_options)?;
            let _ = opposite
                .inner
                .opposite
                .set(Opposite::Linked(Arc::downgrade(&endpoint.inner)));
            let _ = endpoint.inner.opposite.set(Opposite::Owned(opposite));
        }

        if let Some(peer) = options.connected {
            endpoint.add_connection(&peer)?;
        }

        Ok(endpoint)
    }

    pub fn new_send(name: impl Into<String>, options: EndpointOptions) -> Result<Self> {
        Self::new(name, EndpointKind::SEND, options)
    }

    pub fn new_receive(name: impl Into<String>, options: EndpointOptions) -> Result<Self> {
        Self::new(name, EndpointKind::RECEIVE, options)
    }

    pub fn new_multi_send(name: impl Into<String>, options: EndpointOptions) -> Result<Self> {
        Self::new(name, EndpointKind::MULTI_SEND, options)
    }

    pub fn new_self_connected_receive(
        name: impl Into<String>,
        options: EndpointOptions,
    ) -> Result<Self> {
        Self::new(name, EndpointKind::SELF_CONNECTED_RECEIVE, options)
    }

    pub fn new_send_receive(name: impl Into<String>, options: EndpointOptions) -> Result<Self> {
        Self::new(name, EndpointKind::SEND_RECEIVE, options)
    }

    pub fn new_dummy_receive(name: impl Into<String>, options: EndpointOptions) -> Result<Self> {
        Self::new(name, EndpointKind::DUMMY_RECEIVE, options)
    }

    fn link_opposite(&self, other: &Endpoint) -> Result<()> {
        if !self.connectable(other) || self.is_same(other) {
            return Err(self.incompatible_role(other));
        }
        if other.inner.opposite.get().is_some() {
            return Err(EndpointError::OppositeAlreadyAssigned(other.identifier()));
        }
        if self
            .inner
            .opposite
            .set(Opposite::Linked(Arc::downgrade(&other.inner)))
            .is_err()
        {
            return Err(EndpointError::OppositeAlreadyAssigned(self.identifier()));
        }
        other
            .inner
            .opposite
            .set(Opposite::Linked(Arc::downgrade(&self.inner)))
            .map_err(|_| EndpointError::OppositeAlreadyAssigned(other.identifier()))
    }

    pub fn id(&self) -> EndpointId {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn owner(&self) -> Option<&Arc<dyn Owner>> {
        self.inner.owner.as_ref()
    }

    pub fn kind(&self) -> EndpointKind {
        self.inner.kind
    }

    pub fn is_in(&self) -> bool {
        self.inner.kind.is_in
    }

    pub fn is_out(&self) -> bool {
        self.inner.kind.is_out
    }

    pub fn direction(&self) -> Option<Direction> {
        self.inner.kind.direction()
    }

    pub fn is_default(&self) -> bool {
        self.inner.kind.default
    }

    pub fn is_dummy(&self) -> bool {
        self.inner.kind.dummy
    }

    /// Identifier as presented by the owner; the bare name without one
    pub fn identifier(&self) -> String {
        self.identifier_opt()
            .unwrap_or_else(|| self.inner.name.clone())
    }

    fn identifier_opt(&self) -> Option<String> {
        match &self.inner.owner {
            Some(owner) => owner.endpoint_identifier(self),
            None => Some(self.inner.name.clone()),
        }
    }

    pub fn opposite(&self) -> Option<Endpoint> {
        match self.inner.opposite.get()? {
            Opposite::Owned(endpoint) => Some(endpoint.clone()),
            Opposite::Linked(weak) => weak.upgrade().map(|inner| Endpoint { inner }),
        }
    }

    fn is_same(&self, other: &Endpoint) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Able to take a delivery right now
    fn accepts_delivery(&self) -> bool {
        self.inner.kind.dummy || self.has_receiver()
    }

    /// Whether this endpoint can currently deliver (out) or accept (in)
    pub fn is_open(&self) -> bool {
        let kind = self.inner.kind;
        if kind.dummy {
            true
        } else if kind.is_out && !kind.self_connected {
            self.inner
                .connections
                .peers()
                .iter()
                .any(Endpoint::accepts_delivery)
        } else if kind.is_in {
            self.has_receiver()
        } else {
            false
        }
    }

    /// A link is open when its receiving side accepts deliveries
    fn link_open(&self, peer: &Endpoint) -> bool {
        if self.is_out() && peer.is_in() {
            peer.accepts_delivery()
        } else {
            self.accepts_delivery()
        }
    }

    pub fn connectable(&self, other: &Endpoint) -> bool {
        if self.is_same(other) {
            return self.inner.kind.self_connected;
        }
        (self.is_out() && other.is_in()) || (self.is_in() && other.is_out())
    }

    pub fn is_connected(&self, other: &Endpoint) -> bool {
        if self.is_same(other) {
            return self.inner.kind.self_connected;
        }
        self.inner.connections.contains(other.id())
    }

    /// True if `connections()` yields anything
    pub fn has_connections(&self) -> bool {
        self.inner.kind.self_connected || self.inner.connections.len() > 0
    }

    /// Currently connected peers. Self-connected endpoints list
    /// themselves first.
    pub fn connections(&self) -> impl Iterator<Item = Endpoint> {
        let own = self.inner.kind.self_connected.then(|| self.clone());
        own.into_iter().chain(self.inner.connections.peers())
    }

    pub fn connection_state(&self, other: &Endpoint) -> Option<LinkState> {
        self.inner.connections.state(other.id())
    }

    /// Link this endpoint with `other`; `other` records the reverse link.
    ///
    /// Connecting an already connected peer is a no-op. Once both sides
    /// are recorded, open links run their `did_connect` hooks, and paired
    /// opposite endpoints are connected as well. If the opposites cannot
    /// be connected, the new link is removed again and the error returned.
    pub fn add_connection(&self, other: &Endpoint) -> Result<()> {
        if self.is_connected(other) {
            return Ok(());
        }

        let mut opens = DeferredOpens::default();
        self.attach(other, false, &mut opens)?;
        opens.flush()?;

        if let Err(e) = self.connect_opposites(other) {
            warn!(
                endpoint = %self.identifier(),
                peer = %other.identifier(),
                error = %e,
                "Opposite endpoints could not be connected, rolling back"
            );
            self.detach(other, false);
            return Err(e);
        }
        Ok(())
    }

    fn attach(
        &self,
        other: &Endpoint,
        backpointer: bool,
        opens: &mut DeferredOpens,
    ) -> Result<bool> {
        if !self.connectable(other) {
            return Err(self.incompatible_role(other));
        }

        // the self edge of a self-connected endpoint is implicit
        if self.is_same(other) || self.inner.connections.contains(other.id()) {
            return Ok(true);
        }

        if !self.inner.connections.has_room() {
            if backpointer {
                debug!(
                    endpoint = %self.identifier(),
                    peer = %other.identifier(),
                    "Keeping standing connection"
                );
                return Ok(false);
            }
            return Err(self.already_connected());
        }

        if !backpointer && !other.attach(self, true, opens)? {
            return Err(other.already_connected());
        }

        match self.inner.connections.try_insert(other) {
            Insert::Inserted => {
                debug!(
                    endpoint = %self.identifier(),
                    peer = %other.identifier(),
                    "Connection added"
                );
                opens.push(self, other);
                Ok(true)
            }
            Insert::AlreadyPresent => Ok(true),
            Insert::Full if backpointer => Ok(false),
            Insert::Full => {
                other.detach(self, true);
                Err(self.already_connected())
            }
        }
    }

    fn incompatible_role(&self, other: &Endpoint) -> EndpointError {
        EndpointError::IncompatibleRole {
            endpoint: self.identifier(),
            peer: other.identifier(),
            from: direction_name(self.direction()),
            to: direction_name(other.direction()),
        }
    }

    fn already_connected(&self) -> EndpointError {
        let peer = self
            .inner
            .connections
            .peers()
            .first()
            .map(Endpoint::identifier)
            .unwrap_or_default();
        EndpointError::AlreadyConnected {
            endpoint: self.identifier(),
            peer,
        }
    }

    fn connect_opposites(&self, other: &Endpoint) -> Result<()> {
        if let (Some(mine), Some(theirs)) = (self.opposite(), other.opposite()) {
            if !theirs.is_connected(&mine) {
                debug!(
                    endpoint = %theirs.identifier(),
                    peer = %mine.identifier(),
                    "Connecting opposite endpoints"
                );
                theirs.add_connection(&mine)?;
            }
        }
        Ok(())
    }

    /// Tear down the link to `other` on both sides, running any
    /// outstanding teardowns first. Opposite endpoints are disconnected
    /// as well, unless there was no link to remove.
    pub fn remove_connection(&self, other: &Endpoint) {
        if !self.detach(other, false) {
            return;
        }
        if let (Some(mine), Some(theirs)) = (self.opposite(), other.opposite()) {
            if theirs.is_connected(&mine) {
                theirs.remove_connection(&mine);
            }
        }
    }

    /// Returns whether either side had a link to remove
    fn detach(&self, other: &Endpoint, backpointer: bool) -> bool {
        if self.is_same(other) {
            return false;
        }

        self.close_connection(other);
        let mut removed = self.inner.connections.remove(other.id()).is_some();
        if removed {
            debug!(
                endpoint = %self.identifier(),
                peer = %other.identifier(),
                "Connection removed"
            );
        }

        if !backpointer {
            removed |= other.detach(self, true);
        }
        removed
    }

    /// Removes every connection, releasing the peers held by this endpoint
    pub fn remove_all_connections(&self) {
        for peer in self.inner.connections.peers() {
            self.remove_connection(&peer);
        }
    }

    fn open_connection(&self, peer: &Endpoint) -> Result<()> {
        if !self.link_open(peer) {
            return Ok(());
        }
        // still holding the state of an earlier open
        if self.inner.connections.state(peer.id()) != Some(LinkState::Pending) {
            return Ok(());
        }

        let teardown = self
            .inner
            .did_connect
            .as_ref()
            .and_then(|hook| hook(self, peer));

        match self.inner.connections.open(peer.id(), teardown) {
            OpenOutcome::Opened => {
                debug!(
                    endpoint = %self.identifier(),
                    peer = %peer.identifier(),
                    "Connection opened"
                );
                Ok(())
            }
            OpenOutcome::Missing(teardown) => {
                if let Some(teardown) = teardown {
                    teardown();
                }
                Ok(())
            }
            OpenOutcome::AlreadyOpen(teardown) => {
                if let Some(teardown) = teardown {
                    teardown();
                }
                error!(
                    endpoint = %self.identifier(),
                    peer = %peer.identifier(),
                    "did_connect ran while the connection was still open"
                );
                Err(EndpointError::LifecycleViolation {
                    endpoint: self.identifier(),
                    peer: peer.identifier(),
                })
            }
        }
    }

    fn close_connection(&self, peer: &Endpoint) {
        if let Some(teardown) = self.inner.connections.close(peer.id()) {
            debug!(
                endpoint = %self.identifier(),
                peer = %peer.identifier(),
                "Connection closed"
            );
            if let Some(teardown) = teardown {
                teardown();
            }
        }
    }

    /// Bring the link state of both sides in line with the receivers
    fn refresh_links(&self) -> Result<()> {
        for peer in self.inner.connections.peers() {
            for (endpoint, other) in [(self, &peer), (&peer, self)] {
                if endpoint.link_open(other) {
                    endpoint.open_connection(other)?;
                } else {
                    endpoint.close_connection(other);
                }
            }
        }
        Ok(())
    }

    pub fn receiver(&self) -> Option<Arc<Receiver>> {
        self.inner.receiver.load_full()
    }

    pub fn has_receiver(&self) -> bool {
        self.inner.receiver.load().is_some()
    }

    /// Install the receive callable; pending links to this endpoint open
    pub fn set_receive(&self, receiver: Receiver) -> Result<()> {
        if !self.is_in() {
            return Err(EndpointError::Unsupported {
                endpoint: self.identifier(),
                operation: "receive",
            });
        }
        self.inner.receiver.store(Some(Arc::new(receiver)));
        self.refresh_links()
    }

    /// Drop the receive callable; open links to this endpoint close
    pub fn clear_receive(&self) -> Result<()> {
        self.inner.receiver.store(None);
        self.refresh_links()
    }

    /// Hand `payload` straight to the receive callable, bypassing
    /// interceptors.
    pub async fn receive(&self, payload: Value) -> Result<Value> {
        if self.inner.kind.dummy {
            return Ok(Value::Null);
        }
        let receiver = self
            .inner
            .receiver
            .load_full()
            .ok_or_else(|| EndpointError::Rejected(self.identifier()))?;
        receiver.call(payload).await
    }

    /// Snapshot of the interceptor chain, first element runs first
    pub fn interceptors(&self) -> Arc<Vec<Arc<dyn Interceptor>>> {
        self.inner.interceptors.load_full()
    }

    pub fn has_interceptors(&self) -> bool {
        !self.inner.interceptors.load().is_empty()
    }

    pub fn first_interceptor(&self) -> Option<Arc<dyn Interceptor>> {
        self.inner.interceptors.load().first().cloned()
    }

    pub fn last_interceptor(&self) -> Option<Arc<dyn Interceptor>> {
        self.inner.interceptors.load().last().cloned()
    }

    /// Replace the whole chain. Sends already running keep the old one.
    pub fn set_interceptors(&self, interceptors: Vec<Arc<dyn Interceptor>>) {
        self.inner.interceptors.store(Arc::new(interceptors));
    }

    /// Replace the chain from specs, resolving definitions via `registry`
    /// and the owner
    pub fn set_interceptor_specs(
        &self,
        specs: &[InterceptorSpec],
        registry: &InterceptorRegistry,
    ) -> Result<()> {
        let interceptors = registry.instantiate_all(specs, self.inner.owner.as_deref())?;
        self.set_interceptors(interceptors);
        Ok(())
    }

    /// Send `payload` through the interceptor chain to the connected
    /// receiver and return its response.
    ///
    /// Multi-peer endpoints deliver to every open peer concurrently, each
    /// with its own traversal of the chain, and resolve to `null`.
    pub async fn send(&self, payload: Value) -> Result<Value> {
        let kind = self.inner.kind;
        if !kind.is_out {
            return Err(EndpointError::Unsupported {
                endpoint: self.identifier(),
                operation: "send",
            });
        }

        let interceptors = self.interceptors();

        if kind.self_connected {
            debug!(endpoint = %self.identifier(), "Sending to self");
            return chain::dispatch(self, interceptors, self, payload).await;
        }

        match kind.max_peers {
            PeerLimit::One => {
                let peer = self
                    .inner
                    .connections
                    .peers()
                    .into_iter()
                    .next()
                    .ok_or_else(|| EndpointError::NotConnected(self.identifier()))?;
                if !peer.accepts_delivery() {
                    return Err(EndpointError::NotOpen {
                        endpoint: self.identifier(),
                        peer: peer.identifier(),
                    });
                }
                debug!(
                    endpoint = %self.identifier(),
                    peer = %peer.identifier(),
                    interceptors = interceptors.len(),
                    "Sending"
                );
                chain::dispatch(self, interceptors, &peer, payload).await
            }
            PeerLimit::Many => self.fan_out(interceptors, payload).await,
        }
    }

    async fn fan_out(
        &self,
        interceptors: Arc<Vec<Arc<dyn Interceptor>>>,
        payload: Value,
    ) -> Result<Value> {
        let peers = self.inner.connections.peers();
        if peers.is_empty() {
            return Err(EndpointError::NotConnected(self.identifier()));
        }

        let (open, closed): (Vec<_>, Vec<_>) =
            peers.into_iter().partition(Endpoint::accepts_delivery);
        if open.is_empty() {
            return Err(EndpointError::NotOpen {
                endpoint: self.identifier(),
                peer: closed
                    .iter()
                    .map(Endpoint::identifier)
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }

        debug!(
            endpoint = %self.identifier(),
            peers = open.len(),
            skipped = closed.len(),
            "Fanning out"
        );

        let deliveries = open.iter().map(|peer| {
            let interceptors = interceptors.clone();
            let payload = payload.clone();
            async move { (peer, chain::dispatch(self, interceptors, peer, payload).await) }
        });

        let mut first_error = None;
        for (peer, result) in join_all(deliveries).await {
            if let Err(e) = result {
                warn!(
                    endpoint = %self.identifier(),
                    peer = %peer.identifier(),
                    error = %e,
                    "Fan-out delivery failed"
                );
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(Value::Null),
        }
    }

    pub fn describe(&self, options: &JsonOptions) -> EndpointJson {
        let interceptors = self.interceptors();
        let connected = self
            .inner
            .connections
            .peers()
            .iter()
            .filter_map(Endpoint::identifier_opt)
            .collect();

        EndpointJson {
            is_in: self.is_in().then_some(true),
            is_out: self.is_out().then_some(true),
            open: (options.include_runtime_info && self.is_open()).then_some(true),
            default: (options.include_defaults && self.is_default()).then_some(true),
            connected: EndpointJson::connected_from(connected),
            interceptors: (!interceptors.is_empty())
                .then(|| interceptors.iter().map(|i| i.to_json(options)).collect()),
        }
    }

    pub fn to_json_with_options(&self, options: &JsonOptions) -> Value {
        serde_json::to_value(self.describe(options)).unwrap_or_default()
    }

    pub fn to_json(&self) -> Value {
        self.to_json_with_options(&JsonOptions::default())
    }
}

fn direction_name(direction: Option<Direction>) -> String {
    direction.map_or_else(|| "undefined".to_string(), |d| d.to_string())
}

impl PartialEq for Endpoint {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

impl Eq for Endpoint {}

impl Hash for Endpoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(owner) = &self.inner.owner {
            write!(f, "{}.", owner.name())?;
        }
        write!(
            f,
            "{}(connected={},open={})",
            self.inner.name,
            self.has_connections(),
            self.is_open()
        )
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("kind", &self.inner.kind)
            .finish()
    }
}
