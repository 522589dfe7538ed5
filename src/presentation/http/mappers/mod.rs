use crate::{domain::models::Bookmark, presentation::http::responses::BookmarkDto};

pub fn map_bookmark(bookmark: &Bookmark) -> BookmarkDto {
    BookmarkDto {
        id: bookmark.id,
        url: bookmark.url.clone(),
        title: bookmark.title.clone(),
        user_id: bookmark.user_id,
        created_at: bookmark.created_at.to_rfc3339(),
    }
}
