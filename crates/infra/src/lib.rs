//! # Vigie Infrastructure
//!
//! Infrastructure implementations of the core request-layer ports.
//!
//! This crate contains:
//! - The API client (header composition, offline gate, response
//!   classification)
//! - The HTTP transport wrapper
//! - Configuration loading
//!
//! ## Architecture
//! - Consumes traits defined in `vigie-core`
//! - Depends on `vigie-domain` and `vigie-core`
//! - Contains all "impure" code (network I/O, environment access)

pub mod api;
pub mod config;
pub mod http;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientConfig, ApiError, ApiRequest, Payload, RequestBody, TokenStore};
pub use http::HttpClient;
