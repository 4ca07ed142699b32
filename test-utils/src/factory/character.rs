//! Character factory for creating catalog character entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters.
///
/// Only the name and a couple of descriptive attributes are customizable; the remaining
/// optional columns are left empty.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    gender: Option<String>,
    homeworld: Option<String>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with a unique name `"Character {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Character {}", next_id()),
            gender: None,
            homeworld: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn homeworld(mut self, homeworld: impl Into<String>) -> Self {
        self.homeworld = Some(homeworld.into());
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            birth_year: ActiveValue::Set(None),
            eye_color: ActiveValue::Set(None),
            gender: ActiveValue::Set(self.gender),
            hair_color: ActiveValue::Set(None),
            height: ActiveValue::Set(None),
            mass: ActiveValue::Set(None),
            skin_color: ActiveValue::Set(None),
            homeworld: ActiveValue::Set(self.homeworld),
            films: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
