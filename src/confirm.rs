//! ConfirmationDialog - Gate destructive actions behind explicit confirmation.
//!
//! Decouples "intent to delete" from "execution of delete": requesting
//! confirmation stores a zero-argument deferred action; confirming invokes
//! it; cancelling discards it. At most one action is pending at any time.

/// A deferred action executed when the user confirms.
pub type PendingAction = Box<dyn FnOnce() + Send>;

/// Observable dialog state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmState {
    /// No dialog shown, nothing pending.
    Idle,
    /// Dialog shown with a message, one action pending.
    Confirming,
}

/// The confirmation state machine: `Idle` -> `Confirming` -> `Idle`.
#[derive(Default)]
pub struct ConfirmationDialog {
    message: Option<String>,
    pending: Option<PendingAction>,
}

impl ConfirmationDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message` and hold `action` until the user decides.
    ///
    /// Requesting while already confirming silently replaces the prior
    /// pending action; the replaced action is dropped without running.
    /// There is no stacking or queueing.
    pub fn request(&mut self, message: impl Into<String>, action: impl FnOnce() + Send + 'static) {
        self.message = Some(message.into());
        self.pending = Some(Box::new(action));
    }

    /// The user declined: discard the pending action and hide the dialog.
    pub fn cancel(&mut self) {
        self.message = None;
        self.pending = None;
    }

    /// The user confirmed: invoke the pending action, then return to
    /// `Idle` unconditionally - even if the action itself later fails
    /// asynchronously.
    pub fn confirm(&mut self) {
        if let Some(action) = self.pending.take() {
            action();
        }
        self.message = None;
    }

    pub fn state(&self) -> ConfirmState {
        if self.pending.is_some() {
            ConfirmState::Confirming
        } else {
            ConfirmState::Idle
        }
    }

    /// The message shown while confirming.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
