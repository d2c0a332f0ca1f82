//! HighlightRecord - A single captured snippet, immutable once created.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Local;
use serde::{Deserialize, Serialize};

/// One captured snippet of text, fixed at creation time.
///
/// Wire field names match the persisted form: `{id, text, url, date}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRecord {
    /// Unique identifier, monotonically orderable by creation time.
    pub id: String,
    /// The captured snippet.
    pub text: String,
    /// Full address of the document the snippet was captured from.
    pub url: String,
    /// Human-readable creation date, fixed at creation time.
    pub date: String,
}

impl HighlightRecord {
    /// Create a record with a freshly generated id and the current date.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        HighlightRecord {
            id: next_highlight_id(),
            text: text.into(),
            url: url.into(),
            date: Local::now().format("%-m/%-d/%Y").to_string(),
        }
    }
}

static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Generate a time-based id: milliseconds since the Unix epoch, clamped to
/// strictly greater than the previous id issued by this process.
///
/// Two captures within the same millisecond still receive distinct,
/// increasing ids. Collisions across processes are astronomically unlikely
/// within a single store and are accepted.
pub fn next_highlight_id() -> String {
    let now_millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut prev = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now_millis.max(prev + 1);
        match LAST_ID.compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate.to_string(),
            Err(actual) => prev = actual,
        }
    }
}
