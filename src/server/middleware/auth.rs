use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

/// Resolves `Authorization: Bearer <token>` to a stored user.
///
/// Created per request inside a handler, the same way for every protected route:
///
/// ```rust,ignore
/// let user = AuthGuard::new(&state.db, &state.tokens, &headers).require().await?;
/// ```
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Requires an authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - Token valid and its subject exists
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Malformed header or token rejected
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject has been removed
    pub async fn require(&self) -> Result<User, AppError> {
        let token = self.bearer_token()?.ok_or(AuthError::MissingToken)?;

        self.resolve(token).await
    }

    /// Resolves the user if a bearer token is present.
    ///
    /// A request without an `Authorization` header yields `Ok(None)`. A header that is
    /// present but invalid is still an error.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        match self.bearer_token()? {
            Some(token) => self.resolve(token).await.map(Some),
            None => Ok(None),
        }
    }

    async fn resolve(&self, token: &str) -> Result<User, AppError> {
        let user_id = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    fn bearer_token(&self) -> Result<Option<&'a str>, AuthError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Ok(None);
        };

        let value = value
            .to_str()
            .map_err(|_| AuthError::InvalidToken("non-ascii authorization header".to_string()))?;

        match value.split_once(' ') {
            Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => {
                Ok(Some(token.trim()))
            }
            _ => Err(AuthError::InvalidToken(
                "authorization header is not a bearer token".to_string(),
            )),
        }
    }
}
