use super::{ApiConfig, ApiError, ApiResult};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Per-call configuration passed to [`ApiClient::request`].
///
/// Headers given here override the config defaults; the body, when present,
/// must already be serialized to JSON text.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Single request/response round trip with normalized error semantics.
    ///
    /// The full URL is the configured base URL with `endpoint` appended
    /// verbatim; callers pre-encode anything that needs encoding. The
    /// configured timeout applies to the whole round trip.
    ///
    /// A response whose `content-type` contains `application/json` is parsed
    /// as JSON; anything else is carried as a raw text value. Non-2xx
    /// responses become [`ApiError`]s built from the parsed body; failures
    /// with no response at all come back with status 0.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> ApiResult<Value> {
        let url = format!("{}{}", self.config.base_url, endpoint);

        let mut headers = self.config.default_headers.clone();
        headers.extend(options.headers);

        debug!(method = %options.method, %url, "dispatching API request");

        let mut request = self
            .client
            .request(options.method, &url)
            .timeout(self.config.timeout);
        for (name, value) in &headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let text = response.text().await?;

        // The backend reports errors as JSON bodies too, so the same
        // negotiation runs on both paths.
        let payload = if content_type.contains("application/json") {
            serde_json::from_str(&text).map_err(|e| ApiError::network(e.to_string()))?
        } else {
            Value::String(text)
        };

        if status.is_success() {
            Ok(payload)
        } else {
            let error = ApiError::from_response(status, payload);
            warn!(status = error.status, message = %error.message, "API request failed");
            Err(error)
        }
    }

    pub async fn get(&self, endpoint: &str) -> ApiResult<Value> {
        self.request(endpoint, RequestOptions::new(Method::GET)).await
    }

    pub async fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResult<Value> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::network(e.to_string()))?;
        self.request(endpoint, RequestOptions::new(Method::POST).body(body))
            .await
    }

    pub async fn put<B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResult<Value> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::network(e.to_string()))?;
        self.request(endpoint, RequestOptions::new(Method::PUT).body(body))
            .await
    }

    pub async fn delete(&self, endpoint: &str) -> ApiResult<Value> {
        self.request(endpoint, RequestOptions::new(Method::DELETE))
            .await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
