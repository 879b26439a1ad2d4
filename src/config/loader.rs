use super::schema::WiringConfig;
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format, Json, Toml, Yaml},
    Figment,
};
use std::collections::HashSet;
use std::path::Path;

const ENV_PREFIX: &str = "ENDPOINT_LINK_";

/// Loads `endpoint-link.{toml,json,yaml,yml}` from the working directory,
/// overridden by `ENDPOINT_LINK_` environment variables
pub async fn load_from_env_or_file() -> Result<WiringConfig> {
    let config: WiringConfig = Figment::new()
        .merge(Toml::file("endpoint-link.toml"))
        .merge(Json::file("endpoint-link.json"))
        .merge(Yaml::file("endpoint-link.yaml"))
        .merge(Yaml::file("endpoint-link.yml"))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::Parse(e.to_string()))?;

    validate(&config)?;
    Ok(config)
}

pub async fn load_from_path<P: AsRef<Path>>(path: P) -> Result<WiringConfig> {
    let path = path.as_ref();

    let figment = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Figment::new().merge(Toml::file(path)),
        Some("json") => Figment::new().merge(Json::file(path)),
        Some("yaml") | Some("yml") => Figment::new().merge(Yaml::file(path)),
        _ => {
            return Err(ConfigError::Parse(
                "Unsupported config file format. Use .toml, .json, .yaml, or .yml".into(),
            )
            .into())
        }
    };

    let config: WiringConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::Parse(e.to_string()))?;

    validate(&config)?;
    Ok(config)
}

pub fn validate(config: &WiringConfig) -> Result<()> {
    if config.owner.trim().is_empty() {
        return Err(ConfigError::Validation("Owner name must not be empty".into()).into());
    }

    let mut names = HashSet::new();
    for endpoint in &config.endpoints {
        if endpoint.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "Endpoint of owner '{}' has an empty name",
                config.owner
            ))
            .into());
        }
        if !names.insert(endpoint.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Endpoint '{}' is declared more than once",
                endpoint.name
            ))
            .into());
        }
    }

    for endpoint in &config.endpoints {
        if let Some(target) = &endpoint.connected {
            if target == &endpoint.name {
                return Err(ConfigError::Validation(format!(
                    "Endpoint '{}' can't be connected to itself",
                    endpoint.name
                ))
                .into());
            }
            if !names.contains(target.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Endpoint '{}' is connected to unknown endpoint '{}'",
                    endpoint.name, target
                ))
                .into());
            }
        }
    }

    Ok(())
}
