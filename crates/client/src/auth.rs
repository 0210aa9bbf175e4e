//! Access token provider seam
//!
//! Token acquisition, caching, and refresh are owned by the host; the
//! client only asks for the current credential before each gated call.

use async_trait::async_trait;
use wecom_domain::{AccessToken, Result};

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a currently valid access token
    ///
    /// Implementations should refresh the token if needed before returning.
    /// Consistency under concurrent refresh (e.g., at most one refresh in
    /// flight) is the implementation's responsibility.
    async fn access_token(&self) -> Result<AccessToken>;
}
