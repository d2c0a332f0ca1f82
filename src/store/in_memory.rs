//! InMemoryStore - HashMap-backed shared store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::broadcast;

use super::{ChangeEvent, ChangeListener, SharedStore};
use crate::error::StoreError;

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// In-memory shared store backed by a HashMap.
///
/// Clone-friendly via Arc: clones share storage and the change channel,
/// which is how independent capture contexts and a review surface end up
/// coordinating through "the same" store in tests and single-process use.
#[derive(Clone)]
pub struct InMemoryStore {
    storage: Arc<RwLock<HashMap<String, Value>>>,
    changes: broadcast::Sender<ChangeEvent>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            changes,
        }
    }
}

#[async_trait]
impl SharedStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;

        Ok(storage.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        {
            let mut storage = self
                .storage
                .write()
                .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
            storage.insert(key.to_string(), value.clone());
        }

        // Fan out to every subscriber, the setter's own included. No
        // subscribers is not an error.
        let _ = self.changes.send(ChangeEvent {
            key: key.to_string(),
            new_value: value,
        });

        Ok(())
    }

    fn subscribe(&self) -> ChangeListener {
        ChangeListener::new(self.changes.subscribe())
    }
}
