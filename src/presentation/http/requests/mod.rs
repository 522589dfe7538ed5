use poem_openapi::Object;

#[derive(Object, Debug)]
pub struct AddBookmarkRequestDto {
    #[oai(validator(min_length = 1))]
    pub url: String,
    #[oai(validator(min_length = 1))]
    pub title: String,
}
