use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::{Bookmark, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    /// Inserts the row unless one with the same email already exists.
    /// Existing rows are never modified.
    async fn insert_if_absent(&self, user: &User) -> anyhow::Result<()>;
}

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    async fn insert(&self, user_id: Uuid, url: String, title: String) -> anyhow::Result<Bookmark>;
    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<Bookmark>>;
    /// All bookmarks owned by the user, newest first.
    async fn list_by_owner(&self, user_id: &Uuid) -> anyhow::Result<Vec<Bookmark>>;
    async fn delete(&self, id: &Uuid) -> anyhow::Result<()>;
}
