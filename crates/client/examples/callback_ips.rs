//! Example: Listing callback source IPs
//!
//! This example demonstrates wiring the client with env-based configuration
//! and a host-owned token provider, then calling a gated operation and the
//! pure authorization-URL helper.
//!
//! # Setup
//!
//! 1. Set up environment variables: ```bash export WECOM_CORP_ID=wx1234
//!    export WECOM_AGENT_ID=1000002 export WECOM_ACCESS_TOKEN=<token> ```
//!    (a `.env` file works too)
//!
//! 2. Run this example: ```bash cargo run --example callback_ips ```

use std::sync::Arc;

use async_trait::async_trait;
use wecom_client::{AccessTokenProvider, WecomClient};
use wecom_domain::{AccessToken, WecomConfig, WecomError};

/// Token provider backed by a pre-fetched token in the environment.
///
/// Real hosts refresh against the vendor token endpoint and cache the
/// result; the client only ever asks for the current value.
struct EnvTokenProvider;

#[async_trait]
impl AccessTokenProvider for EnvTokenProvider {
    async fn access_token(&self) -> Result<AccessToken, WecomError> {
        std::env::var("WECOM_ACCESS_TOKEN")
            .map(AccessToken::from)
            .map_err(|_| WecomError::Auth("WECOM_ACCESS_TOKEN is not set".to_string()))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("WeCom Callback IP Example");
    println!("=========================\n");

    let config = WecomConfig::from_env()?;
    println!("✓ Configuration loaded");
    println!("  Corp id:  {}", config.corp_id);
    println!("  Agent id: {}", config.agent_id);
    println!("  Prefix:   {}\n", config.api_prefix);

    let client = WecomClient::new(config, Arc::new(EnvTokenProvider))?;

    println!("🔐 Authorization URL for browser login:");
    println!("  {}\n", client.authorize_url("https://example.com/callback", "state-1", None));

    println!("🌐 Fetching callback IP list...");
    match client.get_callback_ip_list().await {
        Ok(response) => {
            println!("✓ Response:");
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Err(e) => {
            println!("✗ Request failed: {}", e);
        }
    }

    Ok(())
}
