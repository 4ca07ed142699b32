use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoriteCreatedDto,
    },
    server::{
        error::AppError,
        extract::IdPath,
        middleware::auth::AuthGuard,
        model::favorite::{FavoriteKey, ItemType},
        service::favorite::FavoriteService,
        state::AppState,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

async fn add_favorite(
    state: AppState,
    headers: HeaderMap,
    item_type: ItemType,
    item_id: i32,
) -> Result<(StatusCode, Json<FavoriteCreatedDto>), AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let favorite = FavoriteService::new(&state.db)
        .add(FavoriteKey::new(user.id, item_type, item_id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteCreatedDto {
            message: format!("Favorite {} added", item_type),
            favorite: favorite.into_dto(),
        }),
    ))
}

async fn remove_favorite(
    state: AppState,
    headers: HeaderMap,
    item_type: ItemType,
    item_id: i32,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    FavoriteService::new(&state.db)
        .remove(FavoriteKey::new(user.id, item_type, item_id))
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Favorite {} deleted", item_type))),
    ))
}

/// POST /favorite/planet/{id} - Add a planet to the caller's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Planet id")),
    responses(
        (status = 201, description = "Favorite planet added", body = FavoriteCreatedDto),
        (status = 400, description = "Planet is already a favorite or id is not an integer", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    add_favorite(state, headers, ItemType::Planet, id).await
}

/// DELETE /favorite/planet/{id} - Remove a planet from the caller's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Planet id")),
    responses(
        (status = 200, description = "Favorite planet deleted", body = MessageDto),
        (status = 400, description = "Id is not an integer", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Favorite planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    remove_favorite(state, headers, ItemType::Planet, id).await
}

/// POST /favorite/people/{id} - Add a character to the caller's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Character id")),
    responses(
        (status = 201, description = "Favorite character added", body = FavoriteCreatedDto),
        (status = 400, description = "Character is already a favorite or id is not an integer", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    add_favorite(state, headers, ItemType::Character, id).await
}

/// DELETE /favorite/people/{id} - Remove a character from the caller's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "Character id")),
    responses(
        (status = 200, description = "Favorite character deleted", body = MessageDto),
        (status = 400, description = "Id is not an integer", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Favorite character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_character(
    State(state): State<AppState>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    remove_favorite(state, headers, ItemType::Character, id).await
}
