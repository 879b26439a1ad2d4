use thiserror::Error;

#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("Can't connect {from} to {to}: {endpoint} = {peer}")]
    IncompatibleRole {
        endpoint: String,
        peer: String,
        from: String,
        to: String,
    },

    #[error("{endpoint} is already connected to: {peer}")]
    AlreadyConnected { endpoint: String, peer: String },

    #[error("{0} is not connected")]
    NotConnected(String),

    #[error("{endpoint}: {peer} is not open")]
    NotOpen { endpoint: String, peer: String },

    #[error("{endpoint} does not support {operation}")]
    Unsupported {
        endpoint: String,
        operation: &'static str,
    },

    #[error("{endpoint}: connection to {peer} still has an open state")]
    LifecycleViolation { endpoint: String, peer: String },

    #[error("{0} already has an opposite endpoint")]
    OppositeAlreadyAssigned(String),

    #[error("Interceptor '{type_name}' could not be created: {reason}")]
    InterceptorConfig { type_name: String, reason: String },

    #[error("{0} rejected the request")]
    Rejected(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl EndpointError {
    /// Conditions a pipeline runs into while it is starting up or
    /// shutting down, as opposed to wiring mistakes.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            EndpointError::NotConnected(_) | EndpointError::NotOpen { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EndpointError>;
