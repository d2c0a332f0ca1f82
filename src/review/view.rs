//! RenderedView - What the review surface hands to its rendering host.

use url::Url;

use crate::collection::HighlightCollection;

/// Shown when the collection is empty.
pub const EMPTY_STATE_MESSAGE: &str =
    "No highlights saved yet. Select text on a page to save one!";

/// Shown when the host store handle is absent.
pub const STORAGE_ERROR_MESSAGE: &str =
    "Error: Storage not accessible. Check host permissions.";

/// Label used when a record's address fails to parse.
pub const INVALID_URL_LABEL: &str = "Invalid URL";

/// Display label derived from a record's source address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLabel {
    /// Hostname label linking back to the full address.
    Linked { host: String, url: String },
    /// The address failed to parse; fixed label, no link.
    Invalid,
}

impl SourceLabel {
    /// Derive the label for one source address.
    ///
    /// A parseable address yields its hostname (empty for hostless
    /// schemes); only a parse failure degrades to the fixed label.
    pub fn derive(url: &str) -> SourceLabel {
        match Url::parse(url) {
            Ok(parsed) => SourceLabel::Linked {
                host: parsed.host_str().unwrap_or("").to_string(),
                url: url.to_string(),
            },
            Err(_) => SourceLabel::Invalid,
        }
    }

    /// The text the host should draw.
    pub fn text(&self) -> &str {
        match self {
            SourceLabel::Linked { host, .. } => host,
            SourceLabel::Invalid => INVALID_URL_LABEL,
        }
    }

    /// The link target, when there is one.
    pub fn link(&self) -> Option<&str> {
        match self {
            SourceLabel::Linked { url, .. } => Some(url),
            SourceLabel::Invalid => None,
        }
    }
}

/// One list entry: the snippet, its source label, and the id a delete
/// request for this entry must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub text: String,
    pub source: SourceLabel,
    pub delete_id: String,
}

/// The full content of the review surface, replaced wholesale on every
/// render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedView {
    /// Initial state before the first render completes.
    Loading,
    /// Static error state: the store handle is absent.
    StorageError,
    /// Empty-state message; the clear-all affordance is hidden.
    Empty,
    /// Newest-first list of highlights.
    List { items: Vec<RenderedItem> },
}

impl RenderedView {
    /// Build the view for a collection snapshot, newest first.
    pub fn from_collection(collection: &HighlightCollection) -> RenderedView {
        if collection.is_empty() {
            return RenderedView::Empty;
        }

        let items = collection
            .newest_first()
            .map(|record| RenderedItem {
                text: record.text.clone(),
                source: SourceLabel::derive(&record.url),
                delete_id: record.id.clone(),
            })
            .collect();
        RenderedView::List { items }
    }

    /// The rendered items; empty for the message states.
    pub fn items(&self) -> &[RenderedItem] {
        match self {
            RenderedView::List { items } => items,
            _ => &[],
        }
    }

    /// The static message for the non-list states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            RenderedView::StorageError => Some(STORAGE_ERROR_MESSAGE),
            RenderedView::Empty => Some(EMPTY_STATE_MESSAGE),
            RenderedView::Loading | RenderedView::List { .. } => None,
        }
    }

    /// Whether the bulk-delete affordance is shown.
    pub fn clear_all_visible(&self) -> bool {
        matches!(self, RenderedView::List { .. })
    }
}
