use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{errors::DomainError, models::Bookmark, repositories::BookmarkRepository};

pub struct ListBookmarksUseCase {
    bookmarks: Arc<dyn BookmarkRepository>,
}

impl ListBookmarksUseCase {
    pub fn new(bookmarks: Arc<dyn BookmarkRepository>) -> Self {
        Self { bookmarks }
    }

    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Bookmark>, DomainError> {
        Ok(self.bookmarks.list_by_owner(&user_id).await?)
    }
}
