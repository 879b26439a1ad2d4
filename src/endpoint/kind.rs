//! Capability record describing what an endpoint can do.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many peers an endpoint may hold at once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerLimit {
    One,
    Many,
}

/// Data flow direction derived from the role flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
    InOut,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::In => write!(f, "in"),
            Direction::Out => write!(f, "out"),
            Direction::InOut => write!(f, "inout"),
        }
    }
}

/// Role and behaviour flags of an endpoint.
///
/// Every endpoint variant is one `Endpoint` type configured with one of
/// these records. The named constants cover the variants in use; custom
/// combinations can be built with the struct literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointKind {
    pub is_in: bool,
    pub is_out: bool,
    pub max_peers: PeerLimit,
    /// `send` loops back into the endpoint's own receiver
    pub self_connected: bool,
    /// Always open, swallows everything it receives
    pub dummy: bool,
    /// Built into its owner rather than declared by configuration
    pub default: bool,
}

impl EndpointKind {
    /// Base endpoint without a role; it can't be connected to anything.
    pub const NONE: Self = Self {
        is_in: false,
        is_out: false,
        max_peers: PeerLimit::Many,
        self_connected: false,
        dummy: false,
        default: false,
    };

    pub const SEND: Self = Self {
        is_in: false,
        is_out: true,
        max_peers: PeerLimit::One,
        self_connected: false,
        dummy: false,
        default: false,
    };

    pub const RECEIVE: Self = Self {
        is_in: true,
        is_out: false,
        max_peers: PeerLimit::Many,
        self_connected: false,
        dummy: false,
        default: false,
    };

    pub const MULTI_SEND: Self = Self {
        is_in: false,
        is_out: true,
        max_peers: PeerLimit::Many,
        self_connected: false,
        dummy: false,
        default: false,
    };

    pub const SELF_CONNECTED_RECEIVE: Self = Self {
        is_in: true,
        is_out: true,
        max_peers: PeerLimit::Many,
        self_connected: true,
        dummy: false,
        default: true,
    };

    pub const SEND_RECEIVE: Self = Self {
        is_in: true,
        is_out: true,
        max_peers: PeerLimit::One,
        self_connected: false,
        dummy: false,
        default: false,
    };

    /// Placeholder used while an endpoint mesh is still being assembled
    pub const DUMMY_RECEIVE: Self = Self {
        is_in: true,
        is_out: false,
        max_peers: PeerLimit::Many,
        self_connected: false,
        dummy: true,
        default: false,
    };

    /// Same capabilities, flagged as a built-in endpoint
    pub const fn as_default(self) -> Self {
        Self {
            default: true,
            ..self
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match (self.is_in, self.is_out) {
            (true, true) => Some(Direction::InOut),
            (true, false) => Some(Direction::In),
            (false, true) => Some(Direction::Out),
            (false, false) => None,
        }
    }

    /// Kind used for an automatically created opposite endpoint
    pub(crate) fn opposite(&self) -> Self {
        if self.is_in {
            Self::SEND
        } else {
            Self::RECEIVE
        }
    }
}
