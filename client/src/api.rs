use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("not signed in or session expired")]
    Unauthorized,
    #[error("bookmark not found")]
    NotFound,
    #[error("api returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

#[async_trait]
pub trait BookmarkApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Bookmark>, ApiClientError>;
    async fn add(&self, url: &str, title: &str) -> Result<Bookmark, ApiClientError>;
    async fn delete(&self, id: Uuid) -> Result<(), ApiClientError>;
}

pub struct HttpBookmarkApi {
    http: Client,
    base_url: String,
    token: String,
}

impl HttpBookmarkApi {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            http: Client::builder()
                .user_agent("bookmark-client")
                .build()
                .expect("failed to build http client"),
            base_url,
            token,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiClientError> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(ApiClientError::Unauthorized),
            StatusCode::NOT_FOUND => Err(ApiClientError::NotFound),
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiClientError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

#[async_trait]
impl BookmarkApi for HttpBookmarkApi {
    async fn list(&self) -> Result<Vec<Bookmark>, ApiClientError> {
        let response = self
            .http
            .get(self.endpoint("/bookmarks"))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn add(&self, url: &str, title: &str) -> Result<Bookmark, ApiClientError> {
        let response = self
            .http
            .post(self.endpoint("/bookmarks/add"))
            .bearer_auth(&self.token)
            .json(&json!({ "url": url, "title": title }))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiClientError> {
        let response = self
            .http
            .post(self.endpoint(&format!("/bookmarks/{id}/delete")))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
