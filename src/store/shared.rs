//! SharedStore - Abstract async key-value storage with change fan-out.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::error::StoreError;

/// A change delivered to subscribers after every successful `set`.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// The key that was written.
    pub key: String,
    /// The full value the key now holds.
    pub new_value: Value,
}

/// Abstract async key-value storage with change notification.
///
/// Reads and writes are asynchronous boundaries: control returns to the
/// caller's event loop between issuing an operation and its completion.
/// Operations are not cancellable once issued; no timeout or retry is
/// imposed at this layer.
#[async_trait]
pub trait SharedStore: Send + Sync {
    /// Get the value stored under `key`. Returns `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Replace the value stored under `key` and notify every subscriber.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Register a listener for all subsequent changes, to any key, from
    /// any process sharing this store - including this one's own writes.
    fn subscribe(&self) -> ChangeListener;
}

/// Shared handle to a store, as held by capture contexts and the review
/// surface.
pub type SharedStoreHandle = Arc<dyn SharedStore>;

/// Receiving end of the change-notification channel.
pub struct ChangeListener {
    rx: broadcast::Receiver<ChangeEvent>,
}

impl ChangeListener {
    pub(crate) fn new(rx: broadcast::Receiver<ChangeEvent>) -> Self {
        ChangeListener { rx }
    }

    /// Wait for the next change. Returns `None` once the store is gone.
    ///
    /// A listener that falls behind the channel buffer skips ahead to the
    /// oldest retained event; consumers re-read the full value on every
    /// change, so skipped intermediates are harmless.
    pub async fn next(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("change listener lagged, skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
