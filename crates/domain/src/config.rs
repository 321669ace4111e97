//! Configuration structures for the API request layer

use serde::{Deserialize, Serialize};

/// Default API base when no configuration value is provided.
///
/// A relative path: the production console is served from the same origin
/// as its backend, so `/api` resolves against it.
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
}

/// Configuration for the API request layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the backend API (e.g. "https://backend.vigie.app/api")
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_string() }
    }
}
