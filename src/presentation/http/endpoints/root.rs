use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::{
    services::identity::IdentityVerifier,
    usecases::{
        create_bookmark::CreateBookmarkUseCase, delete_bookmark::DeleteBookmarkUseCase,
        list_bookmarks::ListBookmarksUseCase,
    },
};

#[derive(Clone)]
pub struct ApiState {
    pub identity_verifier: Arc<dyn IdentityVerifier>,
    pub create_bookmark_usecase: Arc<CreateBookmarkUseCase>,
    pub list_bookmarks_usecase: Arc<ListBookmarksUseCase>,
    pub delete_bookmark_usecase: Arc<DeleteBookmarkUseCase>,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Bookmarks,
}

pub struct Endpoints;
