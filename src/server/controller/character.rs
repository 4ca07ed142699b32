use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, character::CharacterDto},
    server::{
        error::AppError, extract::IdPath, service::character::CharacterService, state::AppState,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// GET /people - List every character in the catalog
#[utoipa::path(
    get,
    path = "/people",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters ordered by id", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    let characters_dto: Vec<CharacterDto> = characters.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(characters_dto)))
}

/// GET /people/{id} - Get one character
///
/// # Returns
/// - `200 OK`: The character
/// - `404 Not Found`: No character with that id
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character id")),
    responses(
        (status = 200, description = "The character", body = CharacterDto),
        (status = 400, description = "Id is not an integer", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}
