//! Port interfaces for offline request deferral
//!
//! The durable queue itself (storage engine, replay) lives outside this
//! workspace; the request layer consumes exactly the two operations below
//! and makes no assumption about how or when queued actions are replayed.

use async_trait::async_trait;
use vigie_domain::{PendingAction, Result};

/// Trait for the external durable action queue
#[async_trait]
pub trait ActionQueue: Send + Sync {
    /// Initialize the underlying storage. Idempotent: callers may invoke
    /// this once per deferred request without holding exclusive access.
    async fn init(&self) -> Result<()>;

    /// Persist a pending action and return the queue-assigned identifier.
    async fn save_pending_action(&self, action: &PendingAction) -> Result<String>;
}

/// Trait for probing runtime connectivity
pub trait ConnectivityMonitor: Send + Sync {
    /// Whether the network is currently believed reachable.
    fn is_online(&self) -> bool;
}
