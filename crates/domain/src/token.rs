//! Access token credential types
//!
//! The SDK never acquires, caches, or refreshes tokens; the host's token
//! provider owns that lifecycle. These types only carry the current
//! credential value and its expiry metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bearer access token with optional expiry metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// Token value appended to gated request URLs
    pub access_token: String,

    /// Absolute expiration timestamp (UTC)
    /// `None` when the issuing side did not report a lifetime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Create a token with a known absolute expiry
    #[must_use]
    pub fn new(access_token: impl Into<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { access_token: access_token.into(), expires_at }
    }

    /// Create a token from a lifetime in seconds
    ///
    /// The vendor token endpoint reports `expires_in`; the absolute
    /// `expires_at` timestamp is calculated at construction time. A
    /// non-positive lifetime leaves the expiry unset.
    #[must_use]
    pub fn with_expires_in(access_token: impl Into<String>, expires_in: i64) -> Self {
        let expires_at =
            (expires_in > 0).then(|| Utc::now() + chrono::Duration::seconds(expires_in));

        Self { access_token: access_token.into(), expires_at }
    }

    /// Check if the token is expired or will expire within the given
    /// threshold
    ///
    /// # Arguments
    /// * `threshold_seconds` - Number of seconds before expiry to consider
    ///   expired (default recommendation: 300 = 5 minutes)
    ///
    /// # Returns
    /// `true` if the token is expired or will expire within the threshold,
    /// `false` if it's still valid beyond the threshold or if no expiry is
    /// set
    #[must_use]
    pub fn is_expired(&self, threshold_seconds: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let threshold = chrono::Duration::seconds(threshold_seconds);
                Utc::now() + threshold >= expires_at
            }
            None => false, // If no expiry set, assume not expired
        }
    }

    /// Get seconds until token expiration
    ///
    /// # Returns
    /// `Some(seconds)` if expiry is set, `None` if no expiry timestamp exists
    #[must_use]
    pub fn seconds_until_expiry(&self) -> Option<i64> {
        self.expires_at.map(|expires_at| (expires_at - Utc::now()).num_seconds())
    }
}

impl From<String> for AccessToken {
    fn from(access_token: String) -> Self {
        Self { access_token, expires_at: None }
    }
}

impl From<&str> for AccessToken {
    fn from(access_token: &str) -> Self {
        Self { access_token: access_token.to_string(), expires_at: None }
    }
}
