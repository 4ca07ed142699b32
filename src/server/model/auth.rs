//! Authentication domain models.

use serde::{Deserialize, Serialize};

use crate::model::auth::LoginDto;

/// JWT claims carried by every access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User id rendered as a string
    pub sub: String,
    /// Issued-at, seconds since the epoch
    pub iat: i64,
    /// Expiry, seconds since the epoch
    pub exp: i64,
}

/// Username and plain password submitted to `POST /login`.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub username: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            username: dto.username,
            password: dto.password,
        }
    }
}
