//! Connectivity gate for offline request deferral
//!
//! Decides whether a request may reach the network. Offline mutations are
//! handed to the external durable queue and the call fails with a
//! distinguishable "queued" signal; offline reads pass through and fail at
//! the transport. Replay is entirely the queue's responsibility.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info};
use vigie_core::{ActionQueue, ConnectivityMonitor};
use vigie_domain::PendingAction;

use super::client::RequestBody;
use super::errors::ApiError;

/// Whether a method is assumed to change server state.
pub fn is_mutating(method: &Method) -> bool {
    *method != Method::GET && *method != Method::HEAD
}

/// Gate deciding between network dispatch and durable deferral.
pub struct OfflineGate {
    queue: Arc<dyn ActionQueue>,
    monitor: Arc<dyn ConnectivityMonitor>,
}

impl OfflineGate {
    pub fn new(queue: Arc<dyn ActionQueue>, monitor: Arc<dyn ConnectivityMonitor>) -> Self {
        Self { queue, monitor }
    }

    /// Admit the request to the network, or defer it.
    ///
    /// Online requests and offline reads pass through. An offline mutation
    /// is persisted to the queue and rejected with
    /// [`ApiError::OfflineQueued`] carrying the queue-assigned action id:
    /// the operation has NOT happened yet.
    ///
    /// # Errors
    /// `ApiError::OfflineQueued` after a successful hand-off;
    /// `ApiError::Config` if the queue itself cannot accept the action.
    pub async fn admit(
        &self,
        method: &Method,
        url: &str,
        body: &RequestBody,
    ) -> Result<(), ApiError> {
        if self.monitor.is_online() {
            return Ok(());
        }

        if !is_mutating(method) {
            // Read-only calls are not queued; they fail at the transport.
            debug!(%method, url, "offline read allowed through to transport");
            return Ok(());
        }

        self.queue
            .init()
            .await
            .map_err(|err| ApiError::Config(format!("offline queue unavailable: {err}")))?;

        let action = PendingAction::api_request(url, method.as_str(), decode_payload(body));
        let action_id = self
            .queue
            .save_pending_action(&action)
            .await
            .map_err(|err| ApiError::Config(format!("failed to queue offline action: {err}")))?;

        info!(%method, url, action_id, "offline mutation queued for later sync");
        Err(ApiError::OfflineQueued { action_id })
    }
}

/// Best-effort decode of a request body into a structured payload.
///
/// Textual JSON decodes to its structured value; on decode failure the raw
/// text is kept. Non-UTF-8 bytes are stored lossily as text.
fn decode_payload(body: &RequestBody) -> Value {
    match body {
        RequestBody::None => Value::Null,
        RequestBody::Json(value) => value.clone(),
        RequestBody::Raw(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) => serde_json::from_str(text)
                .unwrap_or_else(|_| Value::String(text.to_string())),
            Err(_) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        },
    }
}
