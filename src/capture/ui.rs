//! CaptureUiState - Explicit state for the per-document capture affordance.
//!
//! The host page reports the user's selection (text plus geometry) and
//! draws whatever this state says; no hidden global element.

use std::time::Duration;

use log::warn;

/// Bounding rectangle of the current selection, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl SelectionRect {
    /// A zero-size box, reported by hosts for hidden or complex elements.
    /// The affordance cannot be positioned against it.
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// A user selection as delivered by the host page.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub text: String,
    pub rect: SelectionRect,
}

/// Current page scroll offset, added to viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

/// Where the host should place the affordance, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonPosition {
    pub x: f64,
    pub y: f64,
}

/// Tunables for the capture affordance.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// How long the "Saved!" feedback stays up before the host hides it.
    pub feedback_hold: Duration,
    /// Horizontal shift centering the affordance under the selection.
    pub center_offset: f64,
    /// Vertical gap between the selection and the affordance.
    pub below_offset: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        CaptureConfig {
            feedback_hold: Duration::from_millis(1500),
            center_offset: 60.0,
            below_offset: 5.0,
        }
    }
}

/// The capture affordance lifecycle:
/// `Hidden` -> `Offered` -> (`Saved` -> after the feedback hold) `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CaptureUiState {
    /// No affordance shown.
    #[default]
    Hidden,
    /// "Save Highlight?" shown at `position`, waiting for the user.
    Offered { position: ButtonPosition },
    /// "Saved!" feedback shown after a successful append.
    Saved { position: ButtonPosition },
}

impl CaptureUiState {
    /// React to a fresh selection. Replaces any prior affordance.
    ///
    /// Empty (after trimming) selections never offer. A zero-size
    /// selection box cannot be positioned against; the offer is skipped
    /// with a logged warning and no record is ever created for it.
    pub fn offer(&mut self, selection: &Selection, scroll: ScrollOffset, config: &CaptureConfig) {
        *self = CaptureUiState::Hidden;

        if selection.text.trim().is_empty() {
            return;
        }
        if selection.rect.is_zero() {
            warn!("selection bounding box is zero; cannot position the save button");
            return;
        }

        let rect = selection.rect;
        let position = ButtonPosition {
            x: scroll.x + rect.left + rect.width / 2.0 - config.center_offset,
            y: scroll.y + rect.bottom + config.below_offset,
        };
        *self = CaptureUiState::Offered { position };
    }

    /// Selection cleared, page scrolled, or the user clicked elsewhere.
    pub fn dismiss(&mut self) {
        *self = CaptureUiState::Hidden;
    }

    /// The append completed; switch to the "Saved!" feedback. The host
    /// hides the affordance after `CaptureConfig::feedback_hold`.
    pub fn mark_saved(&mut self) {
        if let CaptureUiState::Offered { position } = *self {
            *self = CaptureUiState::Saved { position };
        }
    }

    /// Label the host should draw, if any.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            CaptureUiState::Hidden => None,
            CaptureUiState::Offered { .. } => Some("Save Highlight?"),
            CaptureUiState::Saved { .. } => Some("Saved!"),
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, CaptureUiState::Hidden)
    }
}
