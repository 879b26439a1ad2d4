use crate::endpoint::{EndpointKind, JsonOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Endpoints of one owner and the links between them
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WiringConfig {
    pub owner: String,
    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,
    /// Presentation options used when describing the wiring
    #[serde(default)]
    pub json: JsonOptions,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    pub name: String,
    pub kind: KindConfig,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub create_opposite: bool,
    /// Interceptor definitions, type tags or `{ "type": ..., ... }`
    #[serde(default)]
    pub interceptors: Vec<Value>,
    /// Name of another endpoint of the same owner to connect to
    #[serde(default)]
    pub connected: Option<String>,
}

impl EndpointConfig {
    pub fn endpoint_kind(&self) -> EndpointKind {
        let kind = self.kind.endpoint_kind();
        if self.default {
            kind.as_default()
        } else {
            kind
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KindConfig {
    Send,
    Receive,
    MultiSend,
    SelfConnectedReceive,
    SendReceive,
    DummyReceive,
}

impl KindConfig {
    pub fn endpoint_kind(self) -> EndpointKind {
        match self {
            KindConfig::Send => EndpointKind::SEND,
            KindConfig::Receive => EndpointKind::RECEIVE,
            KindConfig::MultiSend => EndpointKind::MULTI_SEND,
            KindConfig::SelfConnectedReceive => EndpointKind::SELF_CONNECTED_RECEIVE,
            KindConfig::SendReceive => EndpointKind::SEND_RECEIVE,
            KindConfig::DummyReceive => EndpointKind::DUMMY_RECEIVE,
        }
    }
}
