//! Backend API client for the Vigie console
//!
//! Single chokepoint through which every console page issues HTTP calls.
//! It injects authentication transparently, normalizes heterogeneous
//! success/error responses into one typed contract, and defers mutating
//! calls into the external durable queue when the network is unavailable.
//!
//! # Architecture
//!
//! - Uses the [`crate::http::HttpClient`] wrapper (no direct reqwest)
//! - Bearer token injected from an explicit [`TokenStore`]
//! - Offline mutations handed to the `ActionQueue` port, never dropped
//! - One network call per invocation; retry/replay is out of scope

pub mod client;
pub mod errors;
pub mod headers;
pub mod offline;
pub mod token;

pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig, ApiRequest, Payload, RequestBody};
pub use errors::{ApiError, ApiErrorCategory};
pub use headers::compose_headers;
pub use offline::OfflineGate;
pub use token::TokenStore;
