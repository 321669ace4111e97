//! API-specific error types
//!
//! Provides the error taxonomy surfaced to console pages. A queued offline
//! mutation is a distinct kind, never a plain failure: the UI must be able
//! to tell the user "saved, will sync" rather than "failed".

use thiserror::Error;
use vigie_domain::VigieError;

/// Categories of API errors for UI presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Mutation durably queued while offline - not a failure
    Deferred,
    /// Transport-level failure reaching the server
    Connectivity,
    /// Server responded with a non-success status
    Http,
    /// Response body could not be parsed per its declared content type
    Decode,
    /// Client misconfiguration
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// The mutation was durably saved for later replay; it has NOT
    /// happened yet.
    #[error("Request queued for later sync (action {action_id})")]
    OfflineQueued { action_id: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::OfflineQueued { .. } => ApiErrorCategory::Deferred,
            Self::Network(_) => ApiErrorCategory::Connectivity,
            Self::Http { .. } => ApiErrorCategory::Http,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Whether this error means the request was durably deferred rather
    /// than failed.
    pub fn is_offline_queued(&self) -> bool {
        matches!(self, Self::OfflineQueued { .. })
    }

    /// HTTP status code, when the server produced a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<VigieError> for ApiError {
    fn from(err: VigieError) -> Self {
        match err {
            VigieError::Network(message) => Self::Network(message),
            VigieError::Config(message) => Self::Config(message),
            VigieError::Queue(message)
            | VigieError::InvalidInput(message)
            | VigieError::Internal(message) => Self::Config(message),
        }
    }
}
