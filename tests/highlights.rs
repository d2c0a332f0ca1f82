mod support;

use std::collections::HashSet;

use highlight_store::{
    CaptureContext, ConfirmState, HighlightsExt, RenderedView, ReviewSurface, SourceLabel,
    CONFIRM_DELETE_ONE,
};
use support::shared_store;

#[tokio::test]
async fn capture_render_confirm_delete_round_trip() {
    let (store, handle) = shared_store();

    // Capture "hello world" from a page.
    let context = CaptureContext::new(Some(handle.clone()), "https://example.com/page");
    context.append_highlight("hello world").await.unwrap();

    let collection = store.highlights().load().await.unwrap();
    assert_eq!(collection.len(), 1);
    let stored = collection.iter().next().unwrap();
    assert_eq!(stored.text, "hello world");
    assert_eq!(stored.url, "https://example.com/page");

    // The review surface shows one item labeled by hostname.
    let mut surface = ReviewSurface::open(Some(handle));
    surface.render().await.unwrap();

    let items = surface.displayed().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "hello world");
    assert_eq!(items[0].source.text(), "example.com");
    assert_eq!(items[0].source.link(), Some("https://example.com/page"));

    // Confirmed delete of that item empties the collection.
    let id = items[0].delete_id.clone();
    surface.request_delete_one(&id);
    assert_eq!(surface.dialog().message(), Some(CONFIRM_DELETE_ONE));
    surface.confirm();
    surface.pump().await.unwrap();

    assert_eq!(surface.displayed(), &RenderedView::Empty);
    assert!(store.highlights().load().await.unwrap().is_empty());
    assert_eq!(surface.dialog().state(), ConfirmState::Idle);
}

#[tokio::test]
async fn captures_from_many_documents_all_land_with_distinct_ids() {
    let (store, handle) = shared_store();

    let pages = [
        "https://example.com/a",
        "https://example.org/b",
        "https://example.net/c",
    ];
    let mut expected = 0usize;
    for page in pages {
        let context = CaptureContext::new(Some(handle.clone()), page);
        for text in ["first", "second"] {
            context.append_highlight(text).await.unwrap();
            expected += 1;
        }
    }

    let collection = store.highlights().load().await.unwrap();
    assert_eq!(collection.len(), expected);

    let ids: HashSet<&str> = collection.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), expected);
}

#[tokio::test]
async fn malformed_address_still_renders_and_deletes() {
    let (store, handle) = shared_store();

    let context = CaptureContext::new(Some(handle.clone()), "not a url");
    let record = context.append_highlight("orphan snippet").await.unwrap();

    let mut surface = ReviewSurface::open(Some(handle));
    surface.render().await.unwrap();

    let items = surface.displayed().items();
    assert_eq!(items[0].source, SourceLabel::Invalid);
    assert_eq!(items[0].source.text(), "Invalid URL");
    assert_eq!(items[0].source.link(), None);

    // Deletion is keyed by id, not by address validity.
    surface.delete_one(&record.id).await.unwrap();
    assert_eq!(surface.displayed(), &RenderedView::Empty);
    assert!(store.highlights().load().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_all_after_many_captures_shows_the_empty_state() {
    let (store, handle) = shared_store();

    let context = CaptureContext::new(Some(handle.clone()), "https://example.com");
    for i in 0..5 {
        context.append_highlight(&format!("snippet {}", i)).await.unwrap();
    }

    let mut surface = ReviewSurface::open(Some(handle));
    surface.render().await.unwrap();
    assert_eq!(surface.displayed().items().len(), 5);

    surface.request_delete_all();
    surface.confirm();
    surface.pump().await.unwrap();

    assert_eq!(surface.displayed(), &RenderedView::Empty);
    assert!(store.highlights().load().await.unwrap().is_empty());
}
