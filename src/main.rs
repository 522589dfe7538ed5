use std::io::Error;
use std::sync::Arc;

use poem::{Route, Server, listener::TcpListener};
use poem_openapi::OpenApiService;
use sqlx::postgres::PgPoolOptions;
use tokio::main;

use bookmarks::{
    application::usecases::{
        create_bookmark::CreateBookmarkUseCase, delete_bookmark::DeleteBookmarkUseCase,
        list_bookmarks::ListBookmarksUseCase,
    },
    config::Config,
    infrastructure::{
        identity::http::HttpIdentityVerifier,
        repositories::postgres::{PostgresBookmarkRepository, PostgresUserRepository},
    },
    presentation::http::endpoints::{
        bookmarks::BookmarksEndpoints,
        root::{ApiState, Endpoints},
    },
};

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::try_parse().map_err(Error::other)?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .map_err(Error::other)?;

    let user_repo = PostgresUserRepository::new(pool.clone());
    let bookmark_repo = PostgresBookmarkRepository::new(pool);
    let identity_verifier = HttpIdentityVerifier::new(
        config.identity_base_url.clone(),
        config.identity_api_key.clone(),
    );

    let state = Arc::new(ApiState {
        identity_verifier,
        create_bookmark_usecase: Arc::new(CreateBookmarkUseCase::new(
            user_repo,
            bookmark_repo.clone(),
        )),
        list_bookmarks_usecase: Arc::new(ListBookmarksUseCase::new(bookmark_repo.clone())),
        delete_bookmark_usecase: Arc::new(DeleteBookmarkUseCase::new(bookmark_repo)),
    });

    let server_url = format!("{}://{}:{}", config.scheme, config.host, config.port);

    tracing::info!("starting server at {}", server_url);

    let api_service = OpenApiService::new(
        (Endpoints, BookmarksEndpoints::new(state)),
        "Bookmarks API",
        "0.1.0",
    )
    .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();
    let app = Route::new().nest("/api", api_service).nest("/", ui);

    Server::new(TcpListener::bind(format!("localhost:{}", config.port)))
        .run(app)
        .await
}
