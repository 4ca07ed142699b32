//! Planet catalog service.

use sea_orm::DatabaseConnection;

use crate::server::{data::planet::PlanetRepository, error::AppError, model::planet::Planet};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the whole planet catalog in id order.
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets)
    }

    /// Gets a single planet.
    ///
    /// # Returns
    /// - `Ok(Planet)` - The planet
    /// - `Err(AppError::NotFound)` - No planet with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        PlanetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))
    }
}
