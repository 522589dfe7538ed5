pub mod api;
pub mod cache;
pub mod sync;

pub use api::{ApiClientError, Bookmark, BookmarkApi, HttpBookmarkApi};
pub use cache::{BookmarkCache, ViewState};
pub use sync::{BookmarkSync, RefreshTrigger, SyncConfig};
