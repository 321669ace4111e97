//! Shared helpers for infra integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use tokio::sync::Mutex as TokioMutex;
use vigie_core::{ActionQueue, ConnectivityMonitor};
use vigie_domain::{PendingAction, Result as DomainResult};

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("vigie_infra=debug")
        .with_test_writer()
        .try_init();
});

/// Initialize test logging once per process.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// In-memory durable queue standing in for the external storage engine.
pub struct InMemoryActionQueue {
    actions: TokioMutex<Vec<(String, PendingAction)>>,
    initialized: AtomicBool,
}

impl InMemoryActionQueue {
    pub fn new() -> Self {
        Self { actions: TokioMutex::new(Vec::new()), initialized: AtomicBool::new(false) }
    }

    pub async fn actions(&self) -> Vec<(String, PendingAction)> {
        self.actions.lock().await.clone()
    }

    pub fn was_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryActionQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionQueue for InMemoryActionQueue {
    async fn init(&self) -> DomainResult<()> {
        // Idempotent: repeated calls are harmless.
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn save_pending_action(&self, action: &PendingAction) -> DomainResult<String> {
        let id = uuid::Uuid::new_v4().to_string();
        self.actions.lock().await.push((id.clone(), action.clone()));
        Ok(id)
    }
}

/// Connectivity monitor whose state tests can flip at runtime.
#[derive(Clone)]
pub struct ToggleMonitor {
    online: Arc<AtomicBool>,
}

impl ToggleMonitor {
    pub fn new(online: bool) -> Self {
        Self { online: Arc::new(AtomicBool::new(online)) }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }
}

impl ConnectivityMonitor for ToggleMonitor {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}
