use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user account. The password hash is never part of it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

/// Response of `GET /users`.
///
/// `access_token` is a fresh token for the caller when the request carried a valid
/// bearer token, otherwise `null`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListDto {
    pub access_token: Option<String>,
    pub users: Vec<UserDto>,
}
