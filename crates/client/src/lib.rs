//! # WeCom Client
//!
//! Token-gated HTTP client for the WeCom (WeChat Work) server-side API:
//! member management, callback IP lookup, and OAuth authorization URL
//! construction.
//!
//! This crate contains:
//! - [`WecomClient`] and its operation surface
//! - Injected collaborator traits ([`AccessTokenProvider`],
//!   [`HttpTransport`])
//! - The default `reqwest`-backed transport
//! - OAuth authorization URL construction
//!
//! ## Architecture
//! - Token acquisition and caching live behind [`AccessTokenProvider`]
//! - All network I/O lives behind [`HttpTransport`]
//! - Vendor response payloads pass through as raw JSON; `errcode`/`errmsg`
//!   interpretation belongs to the caller

pub mod auth;
pub mod client;
pub mod oauth;
pub mod transport;

// Re-export commonly used items
pub use auth::AccessTokenProvider;
pub use client::WecomClient;
pub use oauth::authorize_url;
pub use transport::{ApiRequest, HttpTransport, ReqwestTransport, ReqwestTransportBuilder};
pub use wecom_domain::{AccessToken, Result, WecomConfig, WecomError};
