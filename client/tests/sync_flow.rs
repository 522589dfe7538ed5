use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use bookmark_client::{
    ApiClientError, Bookmark, BookmarkApi, BookmarkSync, RefreshTrigger, SyncConfig, ViewState,
};

#[derive(Default)]
struct FakeBookmarkApi {
    bookmarks: RwLock<Vec<Bookmark>>,
    fail_list: AtomicBool,
    fail_delete: AtomicBool,
}

impl FakeBookmarkApi {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    async fn seed(&self, title: &str) -> Bookmark {
        let bookmark = Bookmark {
            id: Uuid::new_v4(),
            url: "https://example.com".to_string(),
            title: title.to_string(),
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        self.bookmarks.write().await.push(bookmark.clone());
        bookmark
    }
}

#[async_trait]
impl BookmarkApi for FakeBookmarkApi {
    async fn list(&self) -> Result<Vec<Bookmark>, ApiClientError> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ApiClientError::Api {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(self.bookmarks.read().await.clone())
    }

    async fn add(&self, url: &str, title: &str) -> Result<Bookmark, ApiClientError> {
        let bookmark = Bookmark {
            id: Uuid::new_v4(),
            url: url.to_string(),
            title: title.to_string(),
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        self.bookmarks.write().await.push(bookmark.clone());
        Ok(bookmark)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiClientError> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(ApiClientError::Api {
                status: 500,
                message: "boom".to_string(),
            });
        }
        let mut bookmarks = self.bookmarks.write().await;
        let before = bookmarks.len();
        bookmarks.retain(|b| b.id != id);
        if bookmarks.len() == before {
            return Err(ApiClientError::NotFound);
        }
        Ok(())
    }
}

fn sync_over(api: Arc<FakeBookmarkApi>) -> BookmarkSync {
    BookmarkSync::new(api, SyncConfig::default())
}

#[tokio::test]
async fn starts_loading_and_becomes_ready_after_the_first_fetch() {
    let api = FakeBookmarkApi::new();
    api.seed("one").await;
    let sync = sync_over(api);

    assert!(matches!(sync.state().await, ViewState::Loading));
    sync.revalidate().await;
    assert!(matches!(sync.state().await, ViewState::Ready(items) if items.len() == 1));
}

#[tokio::test]
async fn a_failed_fetch_moves_to_error_and_the_next_one_recovers() {
    let api = FakeBookmarkApi::new();
    let sync = sync_over(api.clone());

    api.fail_list.store(true, Ordering::SeqCst);
    sync.revalidate().await;
    assert!(matches!(sync.state().await, ViewState::Error));

    api.fail_list.store(false, Ordering::SeqCst);
    sync.revalidate().await;
    assert!(matches!(sync.state().await, ViewState::Ready(_)));
}

#[tokio::test]
async fn delete_is_applied_optimistically_and_confirmed_by_revalidation() {
    let api = FakeBookmarkApi::new();
    let doomed = api.seed("doomed").await;
    api.seed("kept").await;
    let sync = sync_over(api.clone());
    sync.revalidate().await;

    sync.delete(doomed.id).await.unwrap();

    match sync.state().await {
        ViewState::Ready(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].title, "kept");
        }
        other => panic!("expected ready state, got {other:?}"),
    }
    assert_eq!(api.bookmarks.read().await.len(), 1);
}

#[tokio::test]
async fn a_failed_delete_is_rolled_back_by_refetching_server_truth() {
    let api = FakeBookmarkApi::new();
    let survivor = api.seed("survivor").await;
    let sync = sync_over(api.clone());
    sync.revalidate().await;

    api.fail_delete.store(true, Ordering::SeqCst);
    let result = sync.delete(survivor.id).await;
    assert!(result.is_err());

    // the row was removed locally, but revalidation restored it
    match sync.state().await {
        ViewState::Ready(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, survivor.id);
        }
        other => panic!("expected ready state, got {other:?}"),
    }
}

#[tokio::test]
async fn add_does_not_touch_the_cache_until_the_next_revalidation() {
    let api = FakeBookmarkApi::new();
    let sync = sync_over(api);
    sync.revalidate().await;

    sync.add("https://example.com", "Example").await.unwrap();
    assert!(matches!(sync.state().await, ViewState::Ready(items) if items.is_empty()));

    sync.revalidate().await;
    assert!(matches!(sync.state().await, ViewState::Ready(items) if items.len() == 1));
}

#[tokio::test]
async fn the_polling_loop_picks_up_server_changes() {
    let api = FakeBookmarkApi::new();
    let sync = BookmarkSync::new(
        api.clone(),
        SyncConfig {
            poll_interval: Duration::from_millis(10),
        },
    );

    let (trigger_tx, trigger_rx) = mpsc::channel(4);
    let task = tokio::spawn({
        let sync = sync.clone();
        async move { sync.run(trigger_rx).await }
    });

    api.seed("one").await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(matches!(sync.state().await, ViewState::Ready(items) if items.len() == 1));

    drop(trigger_tx);
    task.await.unwrap();
}

#[tokio::test]
async fn a_focus_trigger_forces_a_refetch_between_polls() {
    let api = FakeBookmarkApi::new();
    let sync = BookmarkSync::new(
        api.clone(),
        SyncConfig {
            // long enough that only triggers can refresh within the test
            poll_interval: Duration::from_secs(3600),
        },
    );

    let (trigger_tx, trigger_rx) = mpsc::channel(4);
    let task = tokio::spawn({
        let sync = sync.clone();
        async move { sync.run(trigger_rx).await }
    });

    // the immediate first tick
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(matches!(sync.state().await, ViewState::Ready(items) if items.is_empty()));

    api.seed("one").await;
    trigger_tx.send(RefreshTrigger::Focus).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(matches!(sync.state().await, ViewState::Ready(items) if items.len() == 1));

    drop(trigger_tx);
    task.await.unwrap();
}
