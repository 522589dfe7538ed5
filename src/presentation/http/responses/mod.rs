use poem_openapi::Object;
use uuid::Uuid;

#[derive(Object)]
#[oai(rename_all = "camelCase")]
pub struct BookmarkDto {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub user_id: Uuid,
    pub created_at: String,
}

#[derive(Object)]
pub struct DeleteBookmarkResponseDto {
    pub success: bool,
}
