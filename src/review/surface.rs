//! ReviewSurface - Render, confirm, and execute deletions; stay live on
//! store changes.

use log::{debug, error};
use tokio::sync::{mpsc, oneshot};

use super::view::RenderedView;
use crate::confirm::ConfirmationDialog;
use crate::error::StoreError;
use crate::store::{
    ChangeEvent, ChangeListener, HighlightsRepository, SharedStoreHandle, HIGHLIGHTS_KEY,
};

/// Confirmation prompt for deleting one highlight.
pub const CONFIRM_DELETE_ONE: &str = "Permanently delete this highlight?";

/// Confirmation prompt for deleting the whole collection.
pub const CONFIRM_DELETE_ALL: &str = "Are you sure you want to delete ALL saved highlights?";

/// A confirmed destructive intent, queued for execution on the surface's
/// event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewCommand {
    DeleteOne(String),
    DeleteAll,
}

/// The review role: one transient instance at a time.
///
/// Holds the last rendered snapshot, the confirmation dialog, a command
/// queue that decouples confirmed intent from execution, and the change
/// subscription that keeps the view live. Everything is processed on one
/// event loop; there is no parallelism within the surface.
pub struct ReviewSurface {
    store: Option<SharedStoreHandle>,
    displayed: RenderedView,
    dialog: ConfirmationDialog,
    commands_tx: mpsc::UnboundedSender<ReviewCommand>,
    commands_rx: mpsc::UnboundedReceiver<ReviewCommand>,
    changes: Option<ChangeListener>,
}

enum LoopEvent {
    Command(Option<ReviewCommand>),
    Change(Option<ChangeEvent>),
    Shutdown,
}

impl ReviewSurface {
    /// Open the surface over an optional store handle and subscribe to
    /// change notifications. Callers (or `run`) perform the initial
    /// render.
    pub fn open(store: Option<SharedStoreHandle>) -> Self {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let changes = store.as_ref().map(|s| s.subscribe());
        ReviewSurface {
            store,
            displayed: RenderedView::Loading,
            dialog: ConfirmationDialog::new(),
            commands_tx,
            commands_rx,
            changes,
        }
    }

    /// The most recently rendered content.
    pub fn displayed(&self) -> &RenderedView {
        &self.displayed
    }

    /// The confirmation dialog, for state inspection by the host.
    pub fn dialog(&self) -> &ConfirmationDialog {
        &self.dialog
    }

    /// Read the full collection and replace the rendered content.
    ///
    /// An absent store handle renders the static storage-error view; a
    /// failing store operation propagates unchanged.
    pub async fn render(&mut self) -> Result<(), StoreError> {
        let Some(store) = self.store.as_deref() else {
            error!("storage is not accessible from the review surface");
            self.displayed = RenderedView::StorageError;
            return Ok(());
        };

        let collection = HighlightsRepository::new(store).load().await?;
        debug!("highlights retrieved, count: {}", collection.len());
        self.displayed = RenderedView::from_collection(&collection);
        Ok(())
    }

    /// Remove the record with the given id and re-render.
    ///
    /// Idempotent: an absent id results in a write of an unchanged (or
    /// concurrently changed) collection, never an error.
    pub async fn delete_one(&mut self, id: &str) -> Result<(), StoreError> {
        let Some(store) = self.store.as_deref() else {
            error!("storage is unavailable for deletion");
            return Ok(());
        };

        let repo = HighlightsRepository::new(store);
        let mut collection = repo.load().await?;
        collection.remove(id);
        repo.save(&collection).await?;
        self.render().await
    }

    /// Reset the collection to empty (no prior read) and re-render.
    pub async fn delete_all(&mut self) -> Result<(), StoreError> {
        let Some(store) = self.store.as_deref() else {
            error!("storage is unavailable for clear all");
            return Ok(());
        };

        HighlightsRepository::new(store).clear().await?;
        self.render().await
    }

    /// Ask the user to confirm deleting one highlight.
    pub fn request_delete_one(&mut self, id: &str) {
        let tx = self.commands_tx.clone();
        let id = id.to_string();
        self.dialog.request(CONFIRM_DELETE_ONE, move || {
            let _ = tx.send(ReviewCommand::DeleteOne(id));
        });
    }

    /// Ask the user to confirm deleting every highlight.
    pub fn request_delete_all(&mut self) {
        let tx = self.commands_tx.clone();
        self.dialog.request(CONFIRM_DELETE_ALL, move || {
            let _ = tx.send(ReviewCommand::DeleteAll);
        });
    }

    /// The user confirmed: the pending intent is queued for execution.
    pub fn confirm(&mut self) {
        self.dialog.confirm();
    }

    /// The user declined: the pending intent is discarded.
    pub fn cancel(&mut self) {
        self.dialog.cancel();
    }

    /// Execute any commands already queued by confirmed actions, without
    /// waiting for new events.
    pub async fn pump(&mut self) -> Result<(), StoreError> {
        while let Ok(command) = self.commands_rx.try_recv() {
            self.handle(command).await?;
        }
        Ok(())
    }

    /// The surface's event loop: one initial render, then multiplex
    /// confirmed commands and store change events until `shutdown`
    /// resolves (or its sender is dropped).
    ///
    /// Any change to the highlights key re-renders, including changes
    /// caused by this surface's own writes and by capture contexts it
    /// shares nothing but the store with.
    pub async fn run(&mut self, mut shutdown: oneshot::Receiver<()>) -> Result<(), StoreError> {
        self.render().await?;

        loop {
            let event = tokio::select! {
                _ = &mut shutdown => LoopEvent::Shutdown,
                command = self.commands_rx.recv() => LoopEvent::Command(command),
                change = next_change(&mut self.changes) => LoopEvent::Change(change),
            };

            match event {
                LoopEvent::Shutdown => return Ok(()),
                LoopEvent::Command(Some(command)) => self.handle(command).await?,
                // Unreachable while the surface holds its own sender.
                LoopEvent::Command(None) => return Ok(()),
                LoopEvent::Change(Some(change)) => {
                    if change.key == HIGHLIGHTS_KEY {
                        self.render().await?;
                    }
                }
                // Change channel gone; keep serving commands.
                LoopEvent::Change(None) => self.changes = None,
            }
        }
    }

    async fn handle(&mut self, command: ReviewCommand) -> Result<(), StoreError> {
        match command {
            ReviewCommand::DeleteOne(id) => self.delete_one(&id).await,
            ReviewCommand::DeleteAll => self.delete_all().await,
        }
    }
}

async fn next_change(changes: &mut Option<ChangeListener>) -> Option<ChangeEvent> {
    match changes {
        Some(listener) => listener.next().await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::confirm::ConfirmState;
    use crate::store::{HighlightsExt, InMemoryStore};

    async fn surface_with(texts: &[&str]) -> (InMemoryStore, ReviewSurface) {
        let store = InMemoryStore::new();
        let mut collection = crate::collection::HighlightCollection::new();
        for text in texts {
            collection.push(crate::record::HighlightRecord::new(
                *text,
                "https://example.com/page",
            ));
        }
        store.highlights().save(&collection).await.unwrap();

        let surface = ReviewSurface::open(Some(Arc::new(store.clone())));
        (store, surface)
    }

    #[tokio::test]
    async fn starts_loading_until_the_first_render() {
        let (_store, mut surface) = surface_with(&[]).await;
        assert_eq!(surface.displayed(), &RenderedView::Loading);

        surface.render().await.unwrap();
        assert_eq!(surface.displayed(), &RenderedView::Empty);
    }

    #[tokio::test]
    async fn renders_newest_first() {
        let (_store, mut surface) = surface_with(&["a", "b", "c"]).await;
        surface.render().await.unwrap();

        let texts: Vec<&str> = surface
            .displayed()
            .items()
            .iter()
            .map(|i| i.text.as_str())
            .collect();
        assert_eq!(texts, ["c", "b", "a"]);
    }

    #[tokio::test]
    async fn delete_one_removes_exactly_one_record() {
        let (store, mut surface) = surface_with(&["a", "b"]).await;
        surface.render().await.unwrap();

        let id = surface.displayed().items()[0].delete_id.clone();
        surface.delete_one(&id).await.unwrap();

        assert_eq!(surface.displayed().items().len(), 1);
        assert_eq!(store.highlights().load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_one_of_an_absent_id_is_idempotent() {
        let (store, mut surface) = surface_with(&["a"]).await;
        surface.render().await.unwrap();

        surface.delete_one("no-such-id").await.unwrap();

        assert_eq!(surface.displayed().items().len(), 1);
        assert_eq!(store.highlights().load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_all_empties_any_collection() {
        let (store, mut surface) = surface_with(&["a", "b", "c"]).await;
        surface.render().await.unwrap();

        surface.delete_all().await.unwrap();

        assert_eq!(surface.displayed(), &RenderedView::Empty);
        assert!(store.highlights().load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn confirmed_delete_runs_through_the_command_queue() {
        let (store, mut surface) = surface_with(&["a"]).await;
        surface.render().await.unwrap();

        let id = surface.displayed().items()[0].delete_id.clone();
        surface.request_delete_one(&id);
        assert_eq!(surface.dialog().state(), ConfirmState::Confirming);
        assert_eq!(surface.dialog().message(), Some(CONFIRM_DELETE_ONE));

        surface.confirm();
        assert_eq!(surface.dialog().state(), ConfirmState::Idle);
        surface.pump().await.unwrap();

        assert_eq!(surface.displayed(), &RenderedView::Empty);
        assert!(store.highlights().load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cancelled_delete_changes_nothing() {
        let (store, mut surface) = surface_with(&["a"]).await;
        surface.render().await.unwrap();

        surface.request_delete_all();
        assert_eq!(surface.dialog().message(), Some(CONFIRM_DELETE_ALL));
        surface.cancel();
        surface.pump().await.unwrap();

        assert_eq!(surface.displayed().items().len(), 1);
        assert_eq!(store.highlights().load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_store_renders_the_error_view() {
        let mut surface = ReviewSurface::open(None);
        surface.render().await.unwrap();

        assert_eq!(surface.displayed(), &RenderedView::StorageError);
        assert_eq!(
            surface.displayed().message(),
            Some(crate::review::STORAGE_ERROR_MESSAGE)
        );
    }

    #[tokio::test]
    async fn missing_store_makes_deletions_inert() {
        let mut surface = ReviewSurface::open(None);
        surface.render().await.unwrap();

        surface.delete_all().await.unwrap();
        surface.delete_one("any").await.unwrap();
        assert_eq!(surface.displayed(), &RenderedView::StorageError);
    }
}
