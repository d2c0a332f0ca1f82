//! CaptureContext - The append side of the shared collection.

use log::{debug, error};

use crate::error::StoreError;
use crate::record::HighlightRecord;
use crate::store::{HighlightsRepository, SharedStoreHandle};

/// The capture role for one open document.
///
/// Holds the document address and an optional handle to the shared store;
/// the handle is absent when the host denies storage access, in which case
/// every capture is dropped with a logged diagnostic.
pub struct CaptureContext {
    store: Option<SharedStoreHandle>,
    page_url: String,
}

impl CaptureContext {
    pub fn new(store: Option<SharedStoreHandle>, page_url: impl Into<String>) -> Self {
        let page_url = page_url.into();
        debug!("capture context active for {}", page_url);
        CaptureContext { store, page_url }
    }

    /// The address captures from this context are attributed to.
    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// Append one confirmed capture to the shared collection.
    ///
    /// Reads the current collection (empty when absent), appends a fresh
    /// record, and writes the whole collection back. The returned record
    /// doubles as the success signal for transient UI feedback.
    ///
    /// There is no ordering guarantee relative to concurrent appends or
    /// deletes from other contexts: a concurrent writer racing this
    /// read-modify-write can overwrite it from a stale snapshot. A failed
    /// store operation abandons the capture; no retry.
    pub async fn append_highlight(&self, text: &str) -> Result<HighlightRecord, StoreError> {
        let Some(store) = self.store.as_deref() else {
            error!("shared store is unavailable; capture dropped");
            return Err(StoreError::Unavailable);
        };

        let repo = HighlightsRepository::new(store);
        let mut collection = repo.load().await?;

        let record = HighlightRecord::new(text, &self.page_url);
        collection.push(record.clone());
        repo.save(&collection).await?;

        debug!(
            "highlight {} saved from {} ({} total)",
            record.id,
            self.page_url,
            collection.len()
        );
        Ok(record)
    }
}
