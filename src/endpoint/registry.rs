//! Connection registry strategies
//!
//! An endpoint records its peers together with the per-connection
//! lifecycle state. Single-peer endpoints use a mutex guarded slot,
//! everything else a `DashMap` keyed by the peer's id.

use super::{Endpoint, EndpointId, PeerLimit};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Cleanup returned by a `did_connect` hook, run once when the link closes
pub type Teardown = Box<dyn FnOnce() + Send + Sync>;

/// Public view of a connection's lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Recorded, but `did_connect` has not run yet
    Pending,
    /// `did_connect` ran; its teardown is still outstanding
    Open,
}

pub(crate) enum ConnectionState {
    Pending,
    Open(Option<Teardown>),
}

impl ConnectionState {
    fn link_state(&self) -> LinkState {
        match self {
            ConnectionState::Pending => LinkState::Pending,
            ConnectionState::Open(_) => LinkState::Open,
        }
    }
}

pub(crate) struct Connection {
    pub(crate) peer: Endpoint,
    pub(crate) state: ConnectionState,
}

impl Connection {
    fn pending(peer: &Endpoint) -> Self {
        Self {
            peer: peer.clone(),
            state: ConnectionState::Pending,
        }
    }
}

pub(crate) enum Insert {
    Inserted,
    AlreadyPresent,
    Full,
}

pub(crate) enum OpenOutcome {
    Opened,
    /// State was already open; the rejected teardown is handed back
    AlreadyOpen(Option<Teardown>),
    /// Connection disappeared while the hook was running
    Missing(Option<Teardown>),
}

pub(crate) trait ConnectionRegistry: Send + Sync {
    fn contains(&self, id: EndpointId) -> bool;
    fn has_room(&self) -> bool;
    fn try_insert(&self, peer: &Endpoint) -> Insert;
    fn remove(&self, id: EndpointId) -> Option<Connection>;
    fn peers(&self) -> Vec<Endpoint>;
    fn len(&self) -> usize;
    fn state(&self, id: EndpointId) -> Option<LinkState>;
    fn open(&self, id: EndpointId, teardown: Option<Teardown>) -> OpenOutcome;
    /// Moves an open connection back to pending, yielding its teardown.
    /// `None` if the connection is unknown or not open.
    fn close(&self, id: EndpointId) -> Option<Option<Teardown>>;
}

pub(crate) fn for_limit(limit: PeerLimit) -> Box<dyn ConnectionRegistry> {
    match limit {
        PeerLimit::One => Box::new(SingleConnection::default()),
        PeerLimit::Many => Box::new(MultiConnection::default()),
    }
}

#[derive(Default)]
pub(crate) struct SingleConnection {
    slot: Mutex<Option<Connection>>,
}

impl SingleConnection {
    fn slot(&self) -> MutexGuard<'_, Option<Connection>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConnectionRegistry for SingleConnection {
    fn contains(&self, id: EndpointId) -> bool {
        self.slot().as_ref().is_some_and(|c| c.peer.id() == id)
    }

    fn has_room(&self) -> bool {
        self.slot().is_none()
    }

    fn try_insert(&self, peer: &Endpoint) -> Insert {
        let mut slot = self.slot();
        match slot.as_ref() {
            Some(c) if c.peer.id() == peer.id() => Insert::AlreadyPresent,
            Some(_) => Insert::Full,
            None => {
                *slot = Some(Connection::pending(peer));
                Insert::Inserted
            }
        }
    }

    fn remove(&self, id: EndpointId) -> Option<Connection> {
        let mut slot = self.slot();
        if slot.as_ref().is_some_and(|c| c.peer.id() == id) {
            slot.take()
        } else {
            None
        }
    }

    fn peers(&self) -> Vec<Endpoint> {
        self.slot().iter().map(|c| c.peer.clone()).collect()
    }

    fn len(&self) -> usize {
        usize::from(self.slot().is_some())
    }

    fn state(&self, id: EndpointId) -> Option<LinkState> {
        self.slot()
            .as_ref()
            .filter(|c| c.peer.id() == id)
            .map(|c| c.state.link_state())
    }

    fn open(&self, id: EndpointId, teardown: Option<Teardown>) -> OpenOutcome {
        let mut slot = self.slot();
        match slot.as_mut() {
            Some(c) if c.peer.id() == id => open_state(&mut c.state, teardown),
            _ => OpenOutcome::Missing(teardown),
        }
    }

    fn close(&self, id: EndpointId) -> Option<Option<Teardown>> {
        let mut slot = self.slot();
        match slot.as_mut() {
            Some(c) if c.peer.id() == id => close_state(&mut c.state),
            _ => None,
        }
    }
}

#[derive(Default)]
pub(crate) struct MultiConnection {
    connections: DashMap<EndpointId, Connection>,
}

impl ConnectionRegistry for MultiConnection {
    fn contains(&self, id: EndpointId) -> bool {
        self.connections.contains_key(&id)
    }

    fn has_room(&self) -> bool {
        true
    }

    fn try_insert(&self, peer: &Endpoint) -> Insert {
        match self.connections.entry(peer.id()) {
            Entry::Occupied(_) => Insert::AlreadyPresent,
            Entry::Vacant(entry) => {
                entry.insert(Connection::pending(peer));
                Insert::Inserted
            }
        }
    }

    fn remove(&self, id: EndpointId) -> Option<Connection> {
        self.connections.remove(&id).map(|(_, c)| c)
    }

    fn peers(&self) -> Vec<Endpoint> {
        self.connections
            .iter()
            .map(|entry| entry.value().peer.clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.connections.len()
    }

    fn state(&self, id: EndpointId) -> Option<LinkState> {
        self.connections.get(&id).map(|c| c.state.link_state())
    }

    fn open(&self, id: EndpointId, teardown: Option<Teardown>) -> OpenOutcome {
        match self.connections.get_mut(&id) {
            Some(mut c) => open_state(&mut c.state, teardown),
            None => OpenOutcome::Missing(teardown),
        }
    }

    fn close(&self, id: EndpointId) -> Option<Option<Teardown>> {
        self.connections
            .get_mut(&id)
            .and_then(|mut c| close_state(&mut c.state))
    }
}

fn open_state(state: &mut ConnectionState, teardown: Option<Teardown>) -> OpenOutcome {
    match state {
        ConnectionState::Open(_) => OpenOutcome::AlreadyOpen(teardown),
        ConnectionState::Pending => {
            *state = ConnectionState::Open(teardown);
            OpenOutcome::Opened
        }
    }
}

fn close_state(state: &mut ConnectionState) -> Option<Option<Teardown>> {
    match std::mem::replace(state, ConnectionState::Pending) {
        ConnectionState::Open(teardown) => Some(teardown),
        ConnectionState::Pending => None,
    }
}
