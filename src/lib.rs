mod capture;
mod collection;
mod confirm;
mod error;
mod record;
mod review;
mod store;

pub use capture::{
    ButtonPosition, CaptureConfig, CaptureContext, CaptureUiState, ScrollOffset, Selection,
    SelectionRect,
};
pub use collection::HighlightCollection;
pub use confirm::{ConfirmState, ConfirmationDialog, PendingAction};
pub use error::StoreError;
pub use record::{next_highlight_id, HighlightRecord};
pub use review::{
    RenderedItem, RenderedView, ReviewCommand, ReviewSurface, SourceLabel, CONFIRM_DELETE_ALL,
    CONFIRM_DELETE_ONE, EMPTY_STATE_MESSAGE, INVALID_URL_LABEL, STORAGE_ERROR_MESSAGE,
};
pub use store::{
    ChangeEvent, ChangeListener, HighlightsExt, HighlightsRepository, InMemoryStore, SharedStore,
    SharedStoreHandle, HIGHLIGHTS_KEY,
};
