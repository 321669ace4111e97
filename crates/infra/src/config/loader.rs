//! Configuration loader
//!
//! Resolves the API base URL once at startup. The resolved value is
//! threaded into [`crate::api::ApiClient`] through its constructor; nothing
//! in the request layer reads the environment at call time.
//!
//! ## Environment Variables
//! - `VIGIE_API_BASE_URL`: Base URL for the backend API. When unset, the
//!   local `/api` path is used (same-origin deployment).

use vigie_domain::{ApiConfig, Config, Result, VigieError, DEFAULT_API_BASE_URL};

/// Environment variable holding the API base URL.
pub const API_BASE_URL_VAR: &str = "VIGIE_API_BASE_URL";

/// Load configuration, falling back to defaults for unset values.
///
/// # Errors
/// Returns `VigieError::Config` if a variable is set but unusable.
pub fn load() -> Result<Config> {
    let config = load_from_env(API_BASE_URL_VAR)?;
    tracing::info!(base_url = %config.api.base_url, "Configuration loaded");
    Ok(config)
}

/// Load configuration from the given environment variable.
///
/// The variable name is a parameter so tests can probe isolated variables
/// without racing each other over a shared one.
///
/// # Errors
/// Returns `VigieError::Config` if the variable is set but empty or not
/// valid Unicode.
pub fn load_from_env(var: &str) -> Result<Config> {
    let base_url = match std::env::var(var) {
        Ok(value) if value.trim().is_empty() => {
            return Err(VigieError::Config(format!("{var} is set but empty")));
        }
        Ok(value) => value,
        Err(std::env::VarError::NotPresent) => DEFAULT_API_BASE_URL.to_string(),
        Err(std::env::VarError::NotUnicode(_)) => {
            return Err(VigieError::Config(format!("{var} is not valid Unicode")));
        }
    };

    Ok(Config { api: ApiConfig { base_url } })
}
