use crate::config;
use crate::error::{ApiError, ConfigError};
use crate::natureremo::model::{Appliance, Device};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT as USER_AGENT_HEADER};
use reqwest::{Client as HttpClient, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const API_PATH_DEVICES: &str = "1/devices";
pub const API_PATH_APPLIANCES: &str = "1/appliances";
pub const USER_AGENT: &str = concat!("natureremo-exporter/", env!("CARGO_PKG_VERSION"));

pub struct Client {
    http_client: HttpClient,
    endpoint: Url,
    devices_url: Url,
    appliances_url: Url,
    access_token: String,
}

fn resolve(endpoint: &Url, path: &str) -> Result<Url, ConfigError> {
    endpoint.join(path).map_err(|e| {
        ConfigError::invalid(
            "NATUREREMO_ENDPOINT",
            format!("cannot resolve {} against {}: {}", path, endpoint, e),
        )
    })
}

impl Client {
    pub fn new(config: config::NatureRemoConfig) -> Result<Self, ConfigError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| ConfigError::invalid("NATUREREMO_ENDPOINT", e.to_string()))?;
        if endpoint.cannot_be_a_base() {
            return Err(ConfigError::invalid(
                "NATUREREMO_ENDPOINT",
                format!("{} cannot be used as a base URL", endpoint),
            ));
        }
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ConfigError::invalid("NATUREREMO_TIMEOUT_SECONDS", e.to_string()))?;

        Ok(Self {
            http_client,
            devices_url: resolve(&endpoint, API_PATH_DEVICES)?,
            appliances_url: resolve(&endpoint, API_PATH_APPLIANCES)?,
            endpoint,
            access_token: config.access_token,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn fetch_devices(&self) -> Result<Vec<Device>, ApiError> {
        self.get(&self.devices_url).await
    }

    pub async fn fetch_appliances(&self) -> Result<Vec<Appliance>, ApiError> {
        self.get(&self.appliances_url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ApiError> {
        let response = self
            .http_client
            .get(url.clone())
            .header(USER_AGENT_HEADER, USER_AGENT)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::transport(url.as_str(), e))?;

        let status = response.status();
        tracing::info!("HTTP GET {} -> {}", url, status);

        if status != StatusCode::OK {
            return Err(ApiError::http_status(url.as_str(), status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(url.as_str(), e))?;

        serde_json::from_str(&body).map_err(|e| ApiError::decode(url.as_str(), e))
    }
}
