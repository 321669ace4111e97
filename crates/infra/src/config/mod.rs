//! Configuration loading and management
//!
//! This module provides utilities for loading the API request layer
//! configuration from environment variables.

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_from_env};
