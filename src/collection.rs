//! HighlightCollection - The sole persisted aggregate.

use serde::{Deserialize, Serialize};

use crate::record::HighlightRecord;

/// Ordered sequence of highlight records, insertion order = capture order.
///
/// The collection is the unit of every read and every write; there is no
/// per-record addressing at the storage layer. Serializes transparently as
/// a JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightCollection(Vec<HighlightRecord>);

impl HighlightCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end (capture order).
    pub fn push(&mut self, record: HighlightRecord) {
        self.0.push(record);
    }

    /// Remove the record with the given id. Returns true if it was present.
    ///
    /// Removing an absent id leaves the collection unchanged.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|record| record.id != id);
        self.0.len() != before
    }

    /// Iterate records in capture order.
    pub fn iter(&self) -> impl Iterator<Item = &HighlightRecord> {
        self.0.iter()
    }

    /// Iterate records newest-first (display order).
    pub fn newest_first(&self) -> impl Iterator<Item = &HighlightRecord> {
        self.0.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<HighlightRecord>> for HighlightCollection {
    fn from(records: Vec<HighlightRecord>) -> Self {
        HighlightCollection(records)
    }
}
