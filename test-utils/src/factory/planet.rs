//! Planet factory for creating catalog planet entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test planets.
pub struct PlanetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    diameter: Option<i32>,
    climate: Option<String>,
}

impl<'a> PlanetFactory<'a> {
    /// Creates a new PlanetFactory with a unique name `"Planet {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Planet {}", next_id()),
            diameter: None,
            climate: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn diameter(mut self, diameter: i32) -> Self {
        self.diameter = Some(diameter);
        self
    }

    pub fn climate(mut self, climate: impl Into<String>) -> Self {
        self.climate = Some(climate.into());
        self
    }

    /// Builds and inserts the planet entity into the database.
    pub async fn build(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(self.name),
            diameter: ActiveValue::Set(self.diameter),
            rotation_period: ActiveValue::Set(None),
            orbital_period: ActiveValue::Set(None),
            gravity: ActiveValue::Set(None),
            population: ActiveValue::Set(None),
            climate: ActiveValue::Set(self.climate),
            terrain: ActiveValue::Set(None),
            surface_water: ActiveValue::Set(None),
            residents: ActiveValue::Set(None),
            films: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a planet with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    PlanetFactory::new(db).build().await
}
