use crate::config::WiringConfig;
use crate::error::Result;
use crate::interceptor::InterceptorRegistry;
use crate::wiring::Wiring;
use serde_json::Value;
use tracing::{info, warn};

/// Validates `config`, builds its wiring and returns the description.
/// The wiring is torn down before returning.
pub fn run_check(config: &WiringConfig) -> Result<Value> {
    info!("Checking configuration...");
    crate::config::validate(config)?;
    info!("✓ Configuration is valid");

    let wiring = Wiring::build(config, &InterceptorRegistry::with_builtins())?;
    info!(
        "Built {} endpoint(s) for owner '{}'",
        wiring.endpoints().len(),
        config.owner
    );

    for endpoint in wiring.endpoints() {
        if endpoint.is_out() && endpoint.has_connections() && !endpoint.is_open() {
            warn!("  ! {} has no open peer yet", endpoint);
        } else {
            info!("  {}", endpoint);
        }
    }

    let description = wiring.describe();
    wiring.teardown();
    info!("✓ All checks passed");
    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EndpointConfig, KindConfig};
    use crate::endpoint::JsonOptions;

    #[test]
    fn test_check_describes_endpoints() {
        let config = WiringConfig {
            owner: "svc".into(),
            endpoints: vec![EndpointConfig {
                name: "loop".into(),
                kind: KindConfig::SelfConnectedReceive,
                default: false,
                create_opposite: false,
                interceptors: Vec::new(),
                connected: None,
            }],
            json: JsonOptions::all(),
        };

        let description = run_check(&config).unwrap();
        assert_eq!(description["loop"]["default"], true);
        assert_eq!(description["loop"]["in"], true);
        assert_eq!(description["loop"]["out"], true);
    }
}
