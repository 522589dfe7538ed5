use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, mpsc};
use tokio::time::interval;
use uuid::Uuid;

use crate::{
    api::{ApiClientError, Bookmark, BookmarkApi},
    cache::{BookmarkCache, ViewState},
};

/// External events that force a fresh fetch outside the polling schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    Focus,
    Reconnect,
}

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub poll_interval: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
        }
    }
}

/// Keeps the cached bookmark list in step with the server: an immediate
/// fetch on startup, one per poll interval, one per external trigger, and
/// one after every mutation.
#[derive(Clone)]
pub struct BookmarkSync {
    api: Arc<dyn BookmarkApi>,
    cache: Arc<RwLock<BookmarkCache>>,
    config: SyncConfig,
}

impl BookmarkSync {
    pub fn new(api: Arc<dyn BookmarkApi>, config: SyncConfig) -> Self {
        Self {
            api,
            cache: Arc::new(RwLock::new(BookmarkCache::new())),
            config,
        }
    }

    pub async fn state(&self) -> ViewState {
        self.cache.read().await.state().clone()
    }

    /// Replaces the cache with authoritative server state.
    pub async fn revalidate(&self) {
        let fetched = self.api.list().await;
        self.cache.write().await.apply_fetch(fetched);
    }

    /// Polling loop. The first tick fires immediately, so mounting the view
    /// and starting the loop is enough to populate the cache. Ends when the
    /// trigger channel closes.
    pub async fn run(&self, mut triggers: mpsc::Receiver<RefreshTrigger>) {
        let mut ticker = interval(self.config.poll_interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => self.revalidate().await,
                trigger = triggers.recv() => match trigger {
                    Some(_) => self.revalidate().await,
                    None => break,
                },
            }
        }
    }

    /// Submits a new bookmark. The cached list is deliberately left alone;
    /// the next revalidation surfaces the created row.
    pub async fn add(&self, url: &str, title: &str) -> Result<Bookmark, ApiClientError> {
        self.api.add(url, title).await
    }

    /// Optimistic delete: the row disappears locally before the request is
    /// issued. Whatever the outcome, the cache is re-synced from the
    /// server afterwards; a failure is rolled back by that revalidation
    /// rather than by re-inserting the removed row.
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiClientError> {
        self.cache.write().await.remove_local(id);
        let result = self.api.delete(id).await;
        self.revalidate().await;
        result
    }
}
