//! Character catalog service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository, error::AppError, model::character::Character,
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the whole character catalog in id order.
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters)
    }

    /// Gets a single character.
    ///
    /// # Returns
    /// - `Ok(Character)` - The character
    /// - `Err(AppError::NotFound)` - No character with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Character, AppError> {
        CharacterRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))
    }
}
