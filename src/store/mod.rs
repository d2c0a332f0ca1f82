//! Shared Store - Async key-value persistence with change notification.
//!
//! Models the host-provided storage facility both roles communicate
//! through: `get`/`set` over JSON values plus a fan-out change channel
//! that delivers every successful `set` to every subscriber, including
//! the setter's own subscription.
//!
//! ## Access contract
//!
//! Every write of the highlight collection is a full read-modify-write of
//! the single `"highlights"` key. The store offers no transaction or
//! compare-and-set primitive, so two processes racing a read against each
//! other's concurrent write can each compute a new collection from a stale
//! snapshot; the later write silently discards the earlier one (lost
//! update). Operations issued by one process complete in issuance order;
//! nothing is guaranteed across processes. This is the accepted
//! consistency model, not a defect to mask.
//!
//! ## Example
//!
//! ```ignore
//! use highlight_store::{HighlightsExt, InMemoryStore};
//!
//! let store = InMemoryStore::new();
//! let mut listener = store.subscribe();
//!
//! let mut collection = store.highlights().load().await?;
//! collection.push(record);
//! store.highlights().save(&collection).await?;
//!
//! let change = listener.next().await; // the write above, fanned back out
//! ```

mod highlights;
mod in_memory;
mod shared;

pub use highlights::{HighlightsExt, HighlightsRepository, HIGHLIGHTS_KEY};
pub use in_memory::InMemoryStore;
pub use shared::{ChangeEvent, ChangeListener, SharedStore, SharedStoreHandle};
