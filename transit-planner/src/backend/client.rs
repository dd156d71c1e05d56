//! Planning backend HTTP client.

use serde_json::Value;
use tracing::debug;

use super::TransitBackend;
use super::error::BackendError;
use super::types::{RawItinerary, decode_itineraries};
use crate::domain::Stop;

/// Default base URL of the planning backend's API.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the API, e.g. `http://localhost:8000/api/v1`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// HTTP client for the planning backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new backend client.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(BackendError::Config("empty base URL".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a URL and return its JSON body, mapping non-2xx to an error.
    async fn get_json(&self, request: reqwest::RequestBuilder) -> Result<Value, BackendError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| BackendError::Json {
            message: e.to_string(),
        })
    }
}

impl TransitBackend for BackendClient {
    async fn fetch_stops(&self) -> Result<Vec<Stop>, BackendError> {
        let url = format!("{}/stops/", self.base_url);
        debug!(%url, "fetching stops");

        let body = self.get_json(self.http.get(&url)).await?;
        serde_json::from_value(body).map_err(|e| BackendError::Json {
            message: e.to_string(),
        })
    }

    async fn plan(
        &self,
        origin: &Stop,
        destination: &Stop,
    ) -> Result<Option<Vec<RawItinerary>>, BackendError> {
        let url = format!("{}/plan/", self.base_url);
        debug!(%url, origin = %origin.id, destination = %destination.id, "requesting plan");

        let request = self.http.get(&url).query(&[
            ("from_lat", origin.latitude),
            ("from_lon", origin.longitude),
            ("to_lat", destination.latitude),
            ("to_lon", destination.longitude),
        ]);
        let body = self.get_json(request).await?;

        Ok(decode_itineraries(&body))
    }
}
