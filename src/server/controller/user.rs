use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        favorite::FavoriteDto,
        user::{UserDto, UserListDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::{favorite::FavoriteService, user::UserService},
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// GET /users - List all users
///
/// Authentication is optional. When the caller sends a valid bearer token the response
/// also carries a fresh token for them; anonymous callers get `access_token: null`.
///
/// # Returns
/// - `200 OK`: `UserListDto`
/// - `401 Unauthorized`: A bearer token was sent but is invalid
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = UserListDto),
        (status = 401, description = "Bearer token present but invalid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .optional()
        .await?;

    let access_token = caller
        .map(|user| state.tokens.issue(user.id))
        .transpose()?;

    let users = UserService::new(&state.db).get_all_users().await?;
    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(UserListDto {
            access_token,
            users: users_dto,
        }),
    ))
}

/// GET /users/favorites - List the current user's favorites
///
/// # Authentication
/// Requires a valid bearer token
///
/// # Returns
/// - `200 OK`: JSON array of FavoriteDto in insertion order
/// - `401 Unauthorized`: Missing or invalid token
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The caller's favorites", body = Vec<FavoriteDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &state.tokens, &headers);
    let user = auth_guard.require().await?;

    let favorites = FavoriteService::new(&state.db).list(user.id).await?;
    let favorites_dto: Vec<FavoriteDto> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(favorites_dto)))
}
