use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, TokenDto},
    },
    server::{
        error::AppError, extract::JsonBody, middleware::auth::AuthGuard,
        model::auth::LoginParam, service::auth::AuthService, state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// GET /token - Issue a fresh access token for the current user
///
/// # Authentication
/// Requires a valid bearer token
#[utoipa::path(
    get,
    path = "/token",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "New access token", body = TokenDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let access_token = state.tokens.issue(user.id)?;

    Ok((StatusCode::OK, Json(TokenDto { access_token })))
}

/// POST /login - Exchange username and password for an access token
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login succeeded", body = TokenDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Bad username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let access_token = AuthService::new(&state.db, &state.tokens)
        .login(LoginParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(TokenDto { access_token })))
}
