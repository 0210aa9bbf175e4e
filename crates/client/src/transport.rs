//! HTTP transport seam and default implementation
//!
//! Operations describe their call as an [`ApiRequest`] and hand it to an
//! injected [`HttpTransport`]. The shipped [`ReqwestTransport`] performs a
//! single attempt per request: no retries, no backoff, no response caching.
//! Hosts that need such policies wrap or replace the transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;
use tracing::debug;
use wecom_domain::{Result, WecomError};

/// Transient request descriptor handed to the transport
///
/// Constructed fresh per operation and consumed by the call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Full target URL, including the gating `access_token` parameter
    pub url: String,
    /// HTTP method
    pub method: Method,
    /// Additional query parameters appended to the URL
    pub query: Vec<(String, String)>,
    /// JSON payload for POST operations
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Describe a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self { url: url.into(), method: Method::GET, query: Vec::new(), body: None }
    }

    /// Describe a POST request carrying a JSON body
    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self { url: url.into(), method: Method::POST, query: Vec::new(), body: Some(body) }
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Trait for executing vendor API requests
///
/// This trait allows dependency injection and testing with recording or
/// canned transports.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute the described request and return the raw JSON response
    ///
    /// Response payloads are never interpreted; vendor `errcode` bodies come
    /// back to the caller verbatim.
    async fn execute(&self, request: ApiRequest) -> Result<Value>;
}

/// Default transport backed by a shared `reqwest` client
#[derive(Clone)]
pub struct ReqwestTransport {
    client: ReqwestClient,
}

impl ReqwestTransport {
    /// Start building a new transport.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Convenience constructor with default configuration.
    ///
    /// # Errors
    /// Returns `WecomError::Internal` if the underlying client cannot be
    /// built.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let ApiRequest { url, method, query, body } = request;

        debug!(%method, %url, "sending API request");

        let mut builder = self.client.request(method.clone(), &url);

        if !query.is_empty() {
            builder = builder.query(&query);
        }

        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| WecomError::Network(format!("API request failed: {}", e)))?;

        let status = response.status();
        debug!(%method, %url, %status, "received API response");

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(WecomError::Network(format!("API error ({}): {}", status, error_text)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WecomError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

/// Builder for [`ReqwestTransport`].
#[derive(Debug)]
pub struct ReqwestTransportBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for ReqwestTransportBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(30), user_agent: None }
    }
}

impl ReqwestTransportBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    /// Returns `WecomError::Internal` if the underlying client cannot be
    /// built.
    pub fn build(self) -> Result<ReqwestTransport> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder
            .build()
            .map_err(|e| WecomError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(ReqwestTransport { client })
    }
}
