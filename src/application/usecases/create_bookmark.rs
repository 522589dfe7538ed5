use std::sync::Arc;

use url::Url;

use crate::{
    application::services::{identity::Identity, registrar::UserRegistrar},
    domain::{
        errors::DomainError,
        models::Bookmark,
        repositories::{BookmarkRepository, UserRepository},
    },
};

pub struct CreateBookmarkUseCase {
    registrar: UserRegistrar,
    bookmarks: Arc<dyn BookmarkRepository>,
}

pub struct CreateBookmarkRequest {
    pub url: String,
    pub title: String,
}

impl CreateBookmarkUseCase {
    pub fn new(users: Arc<dyn UserRepository>, bookmarks: Arc<dyn BookmarkRepository>) -> Self {
        let registrar = UserRegistrar::new(users);
        Self {
            registrar,
            bookmarks,
        }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        request: CreateBookmarkRequest,
    ) -> Result<Bookmark, DomainError> {
        validate(&request)?;

        // No transaction spans the two writes; a failure after this point
        // leaves at most an orphan user row.
        self.registrar.ensure_user(identity).await?;

        let bookmark = self
            .bookmarks
            .insert(identity.id, request.url, request.title)
            .await?;
        Ok(bookmark)
    }
}

fn validate(request: &CreateBookmarkRequest) -> Result<(), DomainError> {
    if request.title.is_empty() {
        return Err(DomainError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    if Url::parse(&request.url).is_err() {
        return Err(DomainError::Validation(format!(
            "'{}' is not an absolute url",
            request.url
        )));
    }
    Ok(())
}
