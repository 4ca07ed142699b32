//! Password login.
//!
//! Passwords are stored as argon2 PHC strings. A successful login yields an access token
//! from the shared `TokenService`.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::auth::LoginParam,
    service::token::TokenService,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Checks a username and password and issues an access token.
    ///
    /// Unknown usernames, wrong passwords and inactive accounts are indistinguishable
    /// to the caller.
    ///
    /// # Returns
    /// - `Ok(String)` - Access token for the user
    /// - `Err(AuthError::InvalidCredentials)` - Login refused
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, param: LoginParam) -> Result<String, AppError> {
        let credentials = UserRepository::new(self.db)
            .find_credentials_by_username(&param.username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !credentials.user.is_active
            || !verify_password(&param.password, &credentials.password_hash)
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("User {} logged in", credentials.user.id);

        self.tokens.issue(credentials.user.id)
    }
}

/// Hashes a password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted argon2 hash
/// - `Err(AuthError::PasswordHash)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verifies a password against a stored hash. A malformed hash never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
