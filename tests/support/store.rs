use std::sync::Arc;

use highlight_store::{InMemoryStore, SharedStoreHandle};

/// One in-memory store plus a shareable handle to it, standing in for the
/// host persistence facility every role attaches to.
pub fn shared_store() -> (InMemoryStore, SharedStoreHandle) {
    let store = InMemoryStore::new();
    let handle: SharedStoreHandle = Arc::new(store.clone());
    (store, handle)
}
