//! Favorites ledger.
//!
//! Owns the rules for adding and removing favorites: the target catalog item must
//! exist, and a user may favorite a given item only once. The unique index on
//! `favorites` backs the duplicate pre-check.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{
        character::CharacterRepository, favorite::FavoriteRepository, planet::PlanetRepository,
    },
    error::AppError,
    model::favorite::{Favorite, FavoriteKey, ItemType},
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's favorites in insertion order.
    ///
    /// # Arguments
    /// - `user_id` - Authenticated user's ID
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites, empty if none
    /// - `Err(AppError)` - Database error or corrupted stored row
    pub async fn list(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        FavoriteRepository::new(self.db).get_by_user(user_id).await
    }

    /// Adds a catalog item to a user's favorites.
    ///
    /// # Arguments
    /// - `key` - Owner, item type and item id of the new favorite
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(AppError::NotFound)` - The catalog item does not exist, nothing written
    /// - `Err(AppError::Conflict)` - The user already has this favorite
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn add(&self, key: FavoriteKey) -> Result<Favorite, AppError> {
        if !self.item_exists(key.item_type, key.item_id).await? {
            return Err(AppError::NotFound(format!(
                "{} not found",
                key.item_type.title()
            )));
        }

        let repo = FavoriteRepository::new(self.db);

        if repo.exists(key).await? {
            return Err(already_favorite(key.item_type));
        }

        match repo.create(key).await {
            Ok(favorite) => {
                tracing::debug!(
                    "User {} added {} {} to favorites",
                    key.user_id,
                    key.item_type,
                    key.item_id
                );
                Ok(favorite)
            }
            // A concurrent request inserted the same favorite after our pre-check.
            Err(AppError::DbErr(err))
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                Err(already_favorite(key.item_type))
            }
            Err(err) => Err(err),
        }
    }

    /// Removes a favorite.
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was deleted
    /// - `Err(AppError::NotFound)` - The user had no such favorite
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn remove(&self, key: FavoriteKey) -> Result<(), AppError> {
        let deleted = FavoriteRepository::new(self.db).delete(key).await?;

        if !deleted {
            return Err(AppError::NotFound(format!(
                "Favorite {} not found",
                key.item_type
            )));
        }

        Ok(())
    }

    async fn item_exists(&self, item_type: ItemType, item_id: i32) -> Result<bool, AppError> {
        let exists = match item_type {
            ItemType::Character => CharacterRepository::new(self.db).exists(item_id).await?,
            ItemType::Planet => PlanetRepository::new(self.db).exists(item_id).await?,
        };

        Ok(exists)
    }
}

fn already_favorite(item_type: ItemType) -> AppError {
    AppError::Conflict(format!("{} is already a favorite", item_type.title()))
}
