//! Mock server helpers for testing.
//!
//! This module provides a wiremock-based stand-in for the Nature Remo cloud API.

pub mod collectors;

use crate::natureremo::{API_PATH_APPLIANCES, API_PATH_DEVICES};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Re-export collector mocks for convenience
pub use collectors::*;

/// Builder for a mock Nature Remo API server.
pub struct MockNatureRemoServerBuilder {
    server: MockServer,
}

impl MockNatureRemoServerBuilder {
    /// Starts a new mock server.
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Gets the server URL, usable as API endpoint.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Serves `body` for the device list.
    pub async fn mock_devices(self, body: &str) -> Self {
        self.mock_ok(API_PATH_DEVICES, body).await
    }

    /// Serves `body` for the appliance list.
    pub async fn mock_appliances(self, body: &str) -> Self {
        self.mock_ok(API_PATH_APPLIANCES, body).await
    }

    /// Answers the device list with an error status.
    pub async fn mock_devices_status(self, status: u16) -> Self {
        self.mock_status(API_PATH_DEVICES, status).await
    }

    /// Answers the appliance list with an error status.
    pub async fn mock_appliances_status(self, status: u16) -> Self {
        self.mock_status(API_PATH_APPLIANCES, status).await
    }

    async fn mock_ok(self, resource: &str, body: &str) -> Self {
        Mock::given(method("GET"))
            .and(path(format!("/{}", resource)))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_string(body),
            )
            .mount(&self.server)
            .await;
        self
    }

    async fn mock_status(self, resource: &str, status: u16) -> Self {
        Mock::given(method("GET"))
            .and(path(format!("/{}", resource)))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_string(r#"{"code":0,"message":"mock error"}"#),
            )
            .mount(&self.server)
            .await;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_natureremo_server_builder() {
        let server = MockNatureRemoServerBuilder::new()
            .await
            .mock_devices("[]")
            .await;

        assert!(server.url().starts_with("http://"));
    }
}
