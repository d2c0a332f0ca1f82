//! Review Surface - The single transient process that displays the
//! highlight collection and performs confirmed deletions.
//!
//! Stays live by subscribing to the store's change channel: any write to
//! the highlights key, from any capture context or from the surface
//! itself, triggers a full re-render. Rendering fully replaces the prior
//! view; collections are small enough that incremental diffing would buy
//! nothing.

mod surface;
mod view;

pub use surface::{ReviewCommand, ReviewSurface, CONFIRM_DELETE_ALL, CONFIRM_DELETE_ONE};
pub use view::{
    RenderedItem, RenderedView, SourceLabel, EMPTY_STATE_MESSAGE, INVALID_URL_LABEL,
    STORAGE_ERROR_MESSAGE,
};
