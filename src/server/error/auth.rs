use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token failed signature, expiry or subject validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token is invalid: {0}")]
    InvalidToken(String),

    /// Token is valid but its subject no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Login attempt with an unknown username, a wrong password, or an inactive account.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Argon2 failed to hash a password.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to hash password")]
    PasswordHash,
}

/// Converts authentication errors into HTTP responses.
///
/// Every token problem yields the same client-facing 401 message. The specific reason
/// is logged at debug level.
///
/// # Returns
/// - 401 Unauthorized - For token and credential failures
/// - 500 Internal Server Error - For password hashing failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "User not authenticated".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Bad username or password".to_string(),
                }),
            )
                .into_response(),
            Self::PasswordHash => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
