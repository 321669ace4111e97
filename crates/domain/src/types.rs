//! Common data types used throughout the application

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tag identifying what a deferred action represents.
///
/// Only generic API requests exist today; the tag is kept as an enum so the
/// queue consumer can dispatch on it when replaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingActionKind {
    /// A generic API request deferred while offline
    ApiRequest,
}

/// A mutating request deferred to the durable queue while offline.
///
/// Ownership transfers to the queue on hand-off; the request layer keeps no
/// reference afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingAction {
    pub kind: PendingActionKind,
    /// Full target URL (service base + path)
    pub url: String,
    /// HTTP method as an uppercase string (e.g. "POST")
    pub method: String,
    /// Best-effort decoded body: a structured value when the body was
    /// textual JSON, otherwise the raw text as a JSON string
    pub payload: Value,
    pub created_at: DateTime<Utc>,
}

impl PendingAction {
    /// Build a deferred API request stamped with the current time.
    pub fn api_request(url: impl Into<String>, method: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: PendingActionKind::ApiRequest,
            url: url.into(),
            method: method.into(),
            payload,
            created_at: Utc::now(),
        }
    }
}
