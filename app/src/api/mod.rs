pub mod client;
pub mod items;


use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Fallback message for failures that never produced a response and carry
/// no description of their own.
const NETWORK_FAILURE_MESSAGE: &str = "Network request failed";

/// Normalized failure produced by the API client.
///
/// Every error reaching a caller of the api module has this shape, whether
/// the backend answered with a non-2xx status or the request never
/// completed at all.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
    /// Status code of the failed response, or 0 when no response was received.
    pub status: u16,
    /// Parsed response body, when a response was received.
    pub data: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16, data: Option<serde_json::Value>) -> Self {
        Self {
            message: message.into(),
            status,
            data,
        }
    }

    /// Failure with no response: connection refused, serialization failure,
    /// body read failure.
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            NETWORK_FAILURE_MESSAGE.to_string()
        } else {
            message
        };
        Self::new(message, 0, None)
    }

    /// Build an error from a received non-2xx response and its parsed body.
    ///
    /// The message is taken from the body's `message` field, then its
    /// `error` field, then falls back to `"<status> - <reason>"`.
    pub fn from_response(status: reqwest::StatusCode, data: serde_json::Value) -> Self {
        let message = text_field(&data, "message")
            .or_else(|| text_field(&data, "error"))
            .unwrap_or_else(|| {
                format!(
                    "{} - {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown Status")
                )
            });
        Self::new(message, status.as_u16(), Some(data))
    }
}

fn text_field(data: &serde_json::Value, name: &str) -> Option<String> {
    data.get(name)
        .and_then(|value| value.as_str())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "HTTP {}: {}", self.status, self.message)
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::network(error.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Immutable client configuration, injected into [`ApiClient`] at
/// construction. Tests substitute their own values instead of mutating
/// shared state.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub default_headers: HashMap<String, String>,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            default_headers: HashMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ApiConfig {
    /// Default configuration with the base URL taken from `API_BASE_URL`
    /// when set. Meant for binaries; library code receives its config
    /// explicitly.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("API_BASE_URL") {
            config.base_url = base_url;
        }
        config
    }

    /// Fold an `Authorization: Bearer <token>` header into the defaults.
    /// Not applied by default; callers opt in when the backend requires it.
    pub fn with_bearer_token(mut self, token: &str) -> Self {
        self.default_headers
            .insert("Authorization".to_string(), format!("Bearer {token}"));
        self
    }
}

// Re-export common types
pub use client::{ApiClient, RequestOptions};
