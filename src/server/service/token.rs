//! Access token issuing and verification.
//!
//! Tokens are HS256 JWTs whose subject is the user id. The service is created once at
//! startup and shared through `AppState`.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::Claims,
};

struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

#[derive(Clone)]
pub struct TokenService {
    keys: Arc<TokenKeys>,
    lifetime: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - Shared HMAC secret
    /// - `lifetime` - How long issued tokens stay valid
    pub fn new(secret: &str, lifetime: Duration) -> Self {
        Self {
            keys: Arc::new(TokenKeys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            lifetime,
        }
    }

    /// Issues a signed token for a user.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(AppError::JwtErr)` - Encoding failed
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.keys.encoding)?;

        Ok(token)
    }

    /// Verifies a token and returns the user id it was issued for.
    ///
    /// # Returns
    /// - `Ok(i32)` - User id from the `sub` claim
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or non-numeric subject
    pub fn verify(&self, token: &str) -> Result<i32, AuthError> {
        let data = decode::<Claims>(
            token,
            &self.keys.decoding,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        data.claims
            .sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken(format!("subject '{}'", data.claims.sub)))
    }
}
