//! Capture Context - One per viewed document; turns confirmed text
//! selections into durable appends to the shared highlight collection.
//!
//! Leaf role: depends only on the shared store, never on the review
//! surface. The capture affordance (the "Save Highlight?" button) is
//! modeled as an explicit per-context state machine rather than a DOM
//! singleton; the host page supplies selection text and geometry and is
//! responsible only for drawing.

mod context;
mod ui;

pub use context::CaptureContext;
pub use ui::{ButtonPosition, CaptureConfig, CaptureUiState, ScrollOffset, Selection, SelectionRect};
