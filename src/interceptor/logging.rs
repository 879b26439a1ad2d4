use super::{Interceptor, Next};
use crate::endpoint::{Endpoint, JsonOptions};
use crate::error::{EndpointError, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Pass-through interceptor that traces payloads and responses
#[derive(Debug, Clone, Default)]
pub struct LoggingInterceptor {
    label: Option<String>,
}

impl LoggingInterceptor {
    pub const TYPE: &'static str = "logging";

    pub fn new(label: Option<String>) -> Self {
        Self { label }
    }

    /// Reads `{ "type": "logging", "label": "..." }`
    pub fn from_definition(definition: &Value) -> Result<Self> {
        let label = match definition.get("label") {
            None | Some(Value::Null) => None,
            Some(Value::String(label)) => Some(label.clone()),
            Some(other) => {
                return Err(EndpointError::InterceptorConfig {
                    type_name: Self::TYPE.to_string(),
                    reason: format!("label must be a string, got {other}"),
                })
            }
        };
        Ok(Self { label })
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[async_trait]
impl Interceptor for LoggingInterceptor {
    fn type_name(&self) -> &str {
        Self::TYPE
    }

    fn to_json(&self, options: &JsonOptions) -> Value {
        let mut json = json!({ "type": Self::TYPE });
        if options.include_config {
            if let Some(label) = &self.label {
                json["label"] = json!(label);
            }
        }
        json
    }

    async fn receive(&self, endpoint: &Endpoint, next: Next<'_>, payload: Value) -> Result<Value> {
        let label = self.label.as_deref().unwrap_or("-");
        debug!(
            endpoint = %endpoint,
            target = %next.target().identifier(),
            remaining = next.remaining(),
            label,
            payload = %payload,
            "Forwarding payload"
        );

        let result = next.run(payload).await;
        match &result {
            Ok(response) => {
                debug!(endpoint = %endpoint, label, response = %response, "Received response")
            }
            Err(e) => warn!(endpoint = %endpoint, label, error = %e, "Delivery failed"),
        }
        result
    }
}
