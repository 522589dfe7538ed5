use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Postgres};
use uuid::Uuid;

use crate::domain::{
    models::{Bookmark, User},
    repositories::{BookmarkRepository, UserRepository},
};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, email, display_name, avatar_url, created_at FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }

    async fn insert_if_absent(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, display_name, avatar_url, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(&user.avatar_url)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresBookmarkRepository {
    pool: PgPool,
}

impl PostgresBookmarkRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl BookmarkRepository for PostgresBookmarkRepository {
    async fn insert(&self, user_id: Uuid, url: String, title: String) -> anyhow::Result<Bookmark> {
        let record = sqlx::query_as::<_, BookmarkRecord>(
            r#"
            INSERT INTO bookmarks (id, user_id, url, title, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, url, title, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&url)
        .bind(&title)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(record.into())
    }

    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<Bookmark>> {
        let record = sqlx::query_as::<_, BookmarkRecord>(
            r#"SELECT id, user_id, url, title, created_at FROM bookmarks WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(Bookmark::from))
    }

    async fn list_by_owner(&self, user_id: &Uuid) -> anyhow::Result<Vec<Bookmark>> {
        let rows = sqlx::query_as::<_, BookmarkRecord>(
            r#"
            SELECT id, user_id, url, title, created_at
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Bookmark::from).collect())
    }

    async fn delete(&self, id: &Uuid) -> anyhow::Result<()> {
        sqlx::query(r#"DELETE FROM bookmarks WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: Uuid,
    email: String,
    display_name: Option<String>,
    avatar_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            email: value.email,
            display_name: value.display_name,
            avatar_url: value.avatar_url,
            created_at: value.created_at,
        }
    }
}

#[derive(FromRow)]
struct BookmarkRecord {
    id: Uuid,
    user_id: Uuid,
    url: String,
    title: String,
    created_at: DateTime<Utc>,
}

impl From<BookmarkRecord> for Bookmark {
    fn from(value: BookmarkRecord) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            url: value.url,
            title: value.title,
            created_at: value.created_at,
        }
    }
}
