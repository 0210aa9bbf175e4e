//! # WeCom Domain
//!
//! Domain types for the WeCom (WeChat Work) API SDK.
//!
//! This crate contains:
//! - SDK configuration (tenant identity, API prefix)
//! - Error types and Result definitions
//! - Access token credential types
//!
//! ## Architecture
//! - No dependencies on other SDK crates
//! - Only external dependencies allowed
//! - Pure data structures; no I/O

pub mod config;
pub mod errors;
pub mod token;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use token::*;
