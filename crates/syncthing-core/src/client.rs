//! Syncthing REST API client
//!
//! Thin adapter over `reqwest`: one request per call, JSON in and out.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value as JsonValue;
use tracing::{debug, error};

use crate::config::SyncthingConfig;
use crate::error::{Error, Result};

/// HTTP methods used against the Syncthing API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
}

impl ApiMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl From<ApiMethod> for Method {
    fn from(method: ApiMethod) -> Self {
        match method {
            ApiMethod::Get => Method::GET,
            ApiMethod::Post => Method::POST,
        }
    }
}

/// Access to the Syncthing REST API
///
/// The dispatcher only depends on this trait, so it can be exercised
/// without a running daemon.
#[async_trait]
pub trait SyncthingApi: Send + Sync {
    /// Issue a request against `endpoint` (path plus query string)
    ///
    /// Returns the parsed JSON body, or an empty object when the body
    /// is empty. `body` is only sent for non-GET requests.
    async fn call(
        &self,
        endpoint: &str,
        method: ApiMethod,
        body: Option<&JsonValue>,
    ) -> Result<JsonValue>;
}

/// HTTP client for a single Syncthing instance
#[derive(Clone)]
pub struct SyncthingClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SyncthingClient {
    /// Create a new client from the loaded configuration
    pub fn new(config: &SyncthingConfig) -> Result<Self> {
        let client = Client::builder().build().map_err(Error::Http)?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SyncthingApi for SyncthingClient {
    async fn call(
        &self,
        endpoint: &str,
        method: ApiMethod,
        body: Option<&JsonValue>,
    ) -> Result<JsonValue> {
        let url = format!("{}{}", self.base_url, endpoint);

        debug!(method = method.as_str(), endpoint = endpoint, "Calling Syncthing API");

        let mut request = self
            .client
            .request(method.into(), &url)
            .header("X-API-Key", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(body) = body.filter(|_| method != ApiMethod::Get) {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await.map_err(Error::Http)?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| "Unknown Status".to_string());
            error!(
                endpoint = endpoint,
                status = status.as_u16(),
                "Syncthing API request failed"
            );
            return Err(Error::Api {
                status: status.as_u16(),
                status_text,
            });
        }

        // Some endpoints (e.g. scan) answer with an empty body
        let text = response.text().await.map_err(Error::Http)?;
        if text.trim().is_empty() {
            return Ok(JsonValue::Object(serde_json::Map::new()));
        }

        Ok(serde_json::from_str(&text)?)
    }
}
