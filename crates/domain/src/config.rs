//! SDK configuration
//!
//! Holds the tenant identity and endpoint prefix every client operation
//! consumes. The struct is constructed by the host and injected at client
//! construction; nothing here is read from ambient global state.
//!
//! ## Environment Variables
//! `from_env` supports processes configured through the environment:
//! - `WECOM_CORP_ID`: tenant (corp) identifier
//! - `WECOM_AGENT_ID`: application (agent) identifier
//! - `WECOM_API_PREFIX`: API base URL (optional, defaults to the vendor
//!   endpoint)

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WecomError};

/// Default base URL of the vendor HTTP API.
pub const DEFAULT_API_PREFIX: &str = "https://qyapi.weixin.qq.com/cgi-bin/";

/// Configuration for the WeCom API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WecomConfig {
    /// Tenant (corp) identifier; doubles as the OAuth `appid`
    pub corp_id: String,
    /// Application (agent) identifier registered under the tenant
    pub agent_id: String,
    /// Base URL operation paths are appended to
    pub api_prefix: String,
}

impl WecomConfig {
    /// Create a configuration with the vendor-default API prefix
    #[must_use]
    pub fn new(corp_id: impl Into<String>, agent_id: impl Into<String>) -> Self {
        Self {
            corp_id: corp_id.into(),
            agent_id: agent_id.into(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
        }
    }

    /// Override the API prefix (e.g., a regional gateway or a test server)
    ///
    /// Operation URLs are built by direct concatenation, so the prefix must
    /// carry its trailing separator.
    #[must_use]
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns `WecomError::Config` if a required variable is missing.
    pub fn from_env() -> Result<Self> {
        let corp_id = env_var("WECOM_CORP_ID")?;
        let agent_id = env_var("WECOM_AGENT_ID")?;
        let api_prefix =
            std::env::var("WECOM_API_PREFIX").unwrap_or_else(|_| DEFAULT_API_PREFIX.to_string());

        Ok(Self { corp_id, agent_id, api_prefix })
    }
}

/// Get required environment variable
///
/// # Errors
/// Returns `WecomError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        WecomError::Config(format!("Missing required environment variable: {}", key))
    })
}
