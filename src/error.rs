//! Error types for the Nature Remo exporter.
//!
//! This module defines typed errors for different components of the application,
//! providing better error categorization and enabling specific error handling strategies.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// Generic errors that don't fit other categories
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required configuration value is missing
    #[error("missing required configuration: {0}")]
    Missing(String),

    /// Configuration value is invalid
    #[error("invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Nature Remo API errors. Each one aborts a single resource fetch.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a complete response
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than 200
    #[error("{url} responded with {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The body was not the JSON we expected
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while turning one API record into observations.
#[derive(Error, Debug)]
pub enum TranslateError {
    /// A field value could not be parsed
    #[error("unparseable value `{value}' for {field}: {message}")]
    FieldParse {
        field: String,
        value: String,
        message: String,
    },

    /// The payload that belongs to the appliance type is absent
    #[error("{payload} is null for appliance with type={appliance_type}")]
    MissingSubPayload {
        appliance_type: String,
        payload: String,
    },
}

/// Errors raised while rendering the exposition text.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The prometheus client rejected a descriptor or a sample
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    /// The encoder produced something that is not UTF-8
    #[error("exposition output is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl ConfigError {
    /// Creates a new missing configuration error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing(field.into())
    }

    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ApiError {
    /// Creates a transport error for the given URL.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Creates a status error for the given URL.
    pub fn http_status(url: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a decode error for the given URL.
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }
}

impl TranslateError {
    /// Creates a field parse error.
    pub fn field_parse(
        field: impl Into<String>,
        value: impl Into<String>,
        err: impl std::fmt::Display,
    ) -> Self {
        Self::FieldParse {
            field: field.into(),
            value: value.into(),
            message: err.to_string(),
        }
    }

    /// Creates a missing sub-payload error.
    pub fn missing_sub_payload(
        appliance_type: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self::MissingSubPayload {
            appliance_type: appliance_type.into(),
            payload: payload.into(),
        }
    }
}
