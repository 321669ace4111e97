//! # Vigie Domain
//!
//! Business domain types for the Vigie API request layer.
//!
//! This crate contains:
//! - Domain data types (`PendingAction`, request method helpers)
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Vigie crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
