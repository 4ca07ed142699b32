//! User domain models.
//!
//! `User` is the public shape handed to controllers. The stored password hash stays
//! inside `UserCredentials`, which only the authentication service reads.

use crate::model::user::UserDto;

/// Registered account as exposed by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Inactive users cannot log in.
    pub is_active: bool,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO, without any credential material
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            is_active: self.is_active,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is dropped here.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            is_active: entity.is_active,
        }
    }
}

/// User together with the stored argon2 hash, used only for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    /// PHC-formatted argon2 hash
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}
