use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    models::{Bookmark, User},
    repositories::{BookmarkRepository, UserRepository},
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn insert_if_absent(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Ok(());
        }
        users.insert(user.id, user.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryBookmarkRepository {
    bookmarks: Arc<RwLock<HashMap<Uuid, Bookmark>>>,
}

impl InMemoryBookmarkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarkRepository for InMemoryBookmarkRepository {
    async fn insert(&self, user_id: Uuid, url: String, title: String) -> anyhow::Result<Bookmark> {
        let bookmark = Bookmark {
            id: Uuid::new_v4(),
            user_id,
            url,
            title,
            created_at: Utc::now(),
        };
        let mut bookmarks = self.bookmarks.write().await;
        bookmarks.insert(bookmark.id, bookmark.clone());
        Ok(bookmark)
    }

    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<Bookmark>> {
        let bookmarks = self.bookmarks.read().await;
        Ok(bookmarks.get(id).cloned())
    }

    async fn list_by_owner(&self, user_id: &Uuid) -> anyhow::Result<Vec<Bookmark>> {
        let bookmarks = self.bookmarks.read().await;
        let mut owned: Vec<Bookmark> = bookmarks
            .values()
            .filter(|b| &b.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn delete(&self, id: &Uuid) -> anyhow::Result<()> {
        let mut bookmarks = self.bookmarks.write().await;
        bookmarks.remove(id);
        Ok(())
    }
}
