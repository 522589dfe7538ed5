use uuid::Uuid;

use crate::api::{ApiClientError, Bookmark};

/// What the view layer renders.
#[derive(Debug, Clone)]
pub enum ViewState {
    Loading,
    Error,
    Ready(Vec<Bookmark>),
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Loading
    }
}

/// Single source of truth for the bookmark list. Local mutations go through
/// explicit operations; everything else replaces the whole list from a
/// fetch.
#[derive(Default)]
pub struct BookmarkCache {
    state: ViewState,
}

impl BookmarkCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Replaces the cached list with a fetch result. A successful fetch
    /// always wins, even over a pending optimistic removal.
    pub fn apply_fetch(&mut self, result: Result<Vec<Bookmark>, ApiClientError>) {
        self.state = match result {
            Ok(bookmarks) => ViewState::Ready(bookmarks),
            Err(_) => ViewState::Error,
        };
    }

    /// Optimistically removes a bookmark before the server has confirmed.
    /// Returns whether the id was present.
    pub fn remove_local(&mut self, id: Uuid) -> bool {
        match &mut self.state {
            ViewState::Ready(bookmarks) => {
                let before = bookmarks.len();
                bookmarks.retain(|b| b.id != id);
                bookmarks.len() != before
            }
            _ => false,
        }
    }
}
