//! # Vigie Core
//!
//! Port interfaces for the API request layer - no infrastructure
//! dependencies.
//!
//! ## Architecture Principles
//! - Only depends on `vigie-domain`
//! - No database, HTTP, or platform code
//! - All external collaborators reached via traits

pub mod offline;

// Re-export specific items to avoid ambiguity
pub use offline::ports::{ActionQueue, ConnectivityMonitor};
