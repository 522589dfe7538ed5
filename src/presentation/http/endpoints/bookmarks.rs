use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use crate::{
    application::usecases::create_bookmark::CreateBookmarkRequest,
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_bookmark,
        requests::AddBookmarkRequestDto,
        responses::{BookmarkDto, DeleteBookmarkResponseDto},
        security::BearerAuth,
    },
};

#[derive(Clone)]
pub struct BookmarksEndpoints {
    state: Arc<ApiState>,
}

impl BookmarksEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl BookmarksEndpoints {
    #[oai(path = "/bookmarks/add", method = "post", tag = EndpointsTags::Bookmarks)]
    pub async fn add_bookmark(
        &self,
        auth: BearerAuth,
        request: Json<AddBookmarkRequestDto>,
    ) -> PoemResult<Json<BookmarkDto>> {
        let identity = auth
            .into_identity(self.state.identity_verifier.as_ref())
            .await?;
        let payload = CreateBookmarkRequest {
            url: request.url.clone(),
            title: request.title.clone(),
        };

        let bookmark = self
            .state
            .create_bookmark_usecase
            .execute(&identity, payload)
            .await
            .map_err(domain_error)?;

        Ok(Json(map_bookmark(&bookmark)))
    }

    #[oai(path = "/bookmarks", method = "get", tag = EndpointsTags::Bookmarks)]
    pub async fn list_bookmarks(&self, auth: BearerAuth) -> PoemResult<Json<Vec<BookmarkDto>>> {
        let identity = auth
            .into_identity(self.state.identity_verifier.as_ref())
            .await?;

        let bookmarks = self
            .state
            .list_bookmarks_usecase
            .execute(identity.id)
            .await
            .map_err(domain_error)?;

        Ok(Json(bookmarks.iter().map(map_bookmark).collect()))
    }

    #[oai(
        path = "/bookmarks/:bookmark_id/delete",
        method = "post",
        tag = EndpointsTags::Bookmarks,
    )]
    pub async fn delete_bookmark(
        &self,
        auth: BearerAuth,
        bookmark_id: Path<Uuid>,
    ) -> PoemResult<Json<DeleteBookmarkResponseDto>> {
        let identity = auth
            .into_identity(self.state.identity_verifier.as_ref())
            .await?;

        self.state
            .delete_bookmark_usecase
            .execute(identity.id, bookmark_id.0)
            .await
            .map_err(domain_error)?;

        Ok(Json(DeleteBookmarkResponseDto { success: true }))
    }
}

fn domain_error(err: DomainError) -> poem::Error {
    match &err {
        DomainError::Unauthorized(_) => {
            poem::Error::from_string(err.to_string(), poem::http::StatusCode::UNAUTHORIZED)
        }
        DomainError::Validation(_) => {
            poem::Error::from_string(err.to_string(), poem::http::StatusCode::BAD_REQUEST)
        }
        DomainError::NotFound(_) => {
            poem::Error::from_string(err.to_string(), poem::http::StatusCode::NOT_FOUND)
        }
        DomainError::Other(_) => {
            tracing::error!("request failed: {err}");
            poem::Error::from_string(
                "internal error",
                poem::http::StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}
