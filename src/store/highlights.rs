//! HighlightsRepository - Typed accessor for the highlight collection key.

use serde_json::Value;

use super::SharedStore;
use crate::collection::HighlightCollection;
use crate::error::StoreError;

/// The single key the whole system reads and writes.
pub const HIGHLIGHTS_KEY: &str = "highlights";

/// Typed wrapper binding a store to the highlight collection key.
///
/// The collection is the unit of every read and write; callers that want
/// to add or remove one record read the whole collection, transform it,
/// and write the whole thing back.
pub struct HighlightsRepository<'a, S: SharedStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: SharedStore + ?Sized> HighlightsRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Read the full collection, defaulting to empty when the key is
    /// absent.
    pub async fn load(&self) -> Result<HighlightCollection, StoreError> {
        match self.store.get(HIGHLIGHTS_KEY).await? {
            Some(value) => decode(value),
            None => Ok(HighlightCollection::new()),
        }
    }

    /// Write the full collection back.
    pub async fn save(&self, collection: &HighlightCollection) -> Result<(), StoreError> {
        let value = serde_json::to_value(collection)
            .map_err(|e| StoreError::Serde(e.to_string()))?;
        self.store.set(HIGHLIGHTS_KEY, value).await
    }

    /// Unconditionally reset to the empty collection. No prior read.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.save(&HighlightCollection::new()).await
    }
}

fn decode(value: Value) -> Result<HighlightCollection, StoreError> {
    serde_json::from_value(value).map_err(|e| StoreError::Serde(e.to_string()))
}

/// Extension trait for typed highlight access on any store.
pub trait HighlightsExt: SharedStore + Sized {
    /// Get the typed repository for the highlights key.
    fn highlights(&self) -> HighlightsRepository<'_, Self> {
        HighlightsRepository::new(self)
    }
}

impl<S: SharedStore> HighlightsExt for S {}
