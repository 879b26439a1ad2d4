//! Presentation of endpoints for introspection and debugging

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Controls which optional parts end up in an endpoint's JSON form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsonOptions {
    /// Adds the `open` flag
    pub include_runtime_info: bool,
    /// Adds the `default` flag for built-in endpoints
    pub include_defaults: bool,
    /// Lets interceptors emit their configuration
    pub include_config: bool,
    /// Lets interceptors emit configuration marked private
    pub include_private: bool,
}

impl JsonOptions {
    pub fn all() -> Self {
        Self {
            include_runtime_info: true,
            include_defaults: true,
            include_config: true,
            include_private: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Connected {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EndpointJson {
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub is_in: Option<bool>,
    #[serde(rename = "out", skip_serializing_if = "Option::is_none")]
    pub is_out: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected: Option<Connected>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interceptors: Option<Vec<Value>>,
}

impl EndpointJson {
    pub(crate) fn connected_from(mut identifiers: Vec<String>) -> Option<Connected> {
        identifiers.sort();
        match identifiers.len() {
            0 => None,
            1 => identifiers.pop().map(Connected::One),
            _ => Some(Connected::Many(identifiers)),
        }
    }
}
