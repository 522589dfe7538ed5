use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{errors::DomainError, repositories::BookmarkRepository};

pub struct DeleteBookmarkUseCase {
    bookmarks: Arc<dyn BookmarkRepository>,
}

impl DeleteBookmarkUseCase {
    pub fn new(bookmarks: Arc<dyn BookmarkRepository>) -> Self {
        Self { bookmarks }
    }

    /// An ownership mismatch is indistinguishable from an absent row.
    pub async fn execute(&self, user_id: Uuid, bookmark_id: Uuid) -> Result<(), DomainError> {
        match self.bookmarks.get(&bookmark_id).await? {
            Some(bookmark) if bookmark.user_id == user_id => {
                Ok(self.bookmarks.delete(&bookmark_id).await?)
            }
            _ => Err(DomainError::NotFound("bookmark".to_string())),
        }
    }
}
