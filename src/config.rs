use crate::error::ConfigError;
use anyhow::{anyhow, Result};
use serde_derive::Deserialize;
use std::str::FromStr;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig> {
    match envy::from_env::<AppConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load AppConfig: {}", err)),
    }
}

pub const DEFAULT_ENDPOINT: &str = "https://api.nature.global";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Deserialize, Debug, Clone)]
pub struct NatureRemoConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    // `env:NAME`, `file:PATH` or the token itself; resolved by the loader
    pub access_token: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

pub(crate) fn load_natureremo_config() -> Result<NatureRemoConfig> {
    let mut config = match envy::prefixed("NATUREREMO_").from_env::<NatureRemoConfig>() {
        Ok(config) => config,
        Err(err) => return Err(anyhow!("Failed to load NatureRemoConfig: {}", err)),
    };

    reqwest::Url::parse(&config.endpoint)
        .map_err(|e| ConfigError::invalid("NATUREREMO_ENDPOINT", e.to_string()))?;
    config.access_token = resolve_access_token(&config.access_token)?;

    Ok(config)
}

/// Resolves an access token specification into the token itself.
///
/// `env:NAME` reads the environment variable `NAME`, `file:PATH` reads the file
/// at `PATH` (one trailing newline is dropped). Anything else is taken literally.
pub fn resolve_access_token(spec: &str) -> Result<String, ConfigError> {
    if let Some(name) = spec.strip_prefix("env:") {
        std::env::var(name).map_err(|_| {
            ConfigError::missing(format!("environment variable {} is not set", name))
        })
    } else if let Some(path) = spec.strip_prefix("file:") {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::invalid("NATUREREMO_ACCESS_TOKEN", format!("{}: {}", path, e)))?;
        Ok(content
            .strip_suffix('\n')
            .unwrap_or(content.as_str())
            .to_string())
    } else if spec.is_empty() {
        Err(ConfigError::missing("NATUREREMO_ACCESS_TOKEN"))
    } else {
        Ok(spec.to_string())
    }
}

fn default_listen_address() -> String {
    "0.0.0.0:9539".to_string()
}

fn default_telemetry_path() -> String {
    "/metrics".to_string()
}

#[derive(Deserialize, Debug, Clone)]
pub struct WebConfig {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default = "default_telemetry_path")]
    pub telemetry_path: String,
}

pub(crate) fn load_web_config() -> Result<WebConfig> {
    let config = match envy::prefixed("WEB_").from_env::<WebConfig>() {
        Ok(config) => config,
        Err(err) => return Err(anyhow!("Failed to load WebConfig: {}", err)),
    };

    if !config.telemetry_path.starts_with('/') || config.telemetry_path.len() < 2 {
        return Err(ConfigError::invalid(
            "WEB_TELEMETRY_PATH",
            format!("`{}' is not an absolute path", config.telemetry_path),
        )
        .into());
    }

    Ok(config)
}
