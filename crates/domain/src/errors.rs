//! Error types used throughout the SDK
//!
//! These cover infrastructure failures only (configuration, token
//! resolution, transport). Vendor-level `errcode`/`errmsg` payloads are not
//! modeled here: they arrive inside successful responses and pass through to
//! the caller untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the WeCom SDK
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum WecomError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for WeCom SDK operations
pub type Result<T> = std::result::Result<T, WecomError>;
