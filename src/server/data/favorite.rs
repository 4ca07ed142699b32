//! Favorite data repository for database operations.
//!
//! Favorites are keyed by (user_id, item_type, item_id). A unique index on that triple
//! backs the duplicate checks done by the service layer.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::favorite::{Favorite, FavoriteKey},
};

/// Repository providing database operations for favorites.
pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    /// Creates a new FavoriteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FavoriteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all favorites owned by a user in insertion order.
    ///
    /// # Arguments
    /// - `user_id` - Owning user's ID
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - The user's favorites, empty if none
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored row has an unknown item type
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        let entities = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Favorite::from_entity).collect()
    }

    /// Checks whether a favorite matching the key exists.
    pub async fn exists(&self, key: FavoriteKey) -> Result<bool, DbErr> {
        let count = Self::filter_by_key(entity::prelude::Favorite::find(), key)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new favorite.
    ///
    /// Does not check for an existing row; a duplicate key fails with the unique
    /// index violation from the database.
    ///
    /// # Arguments
    /// - `key` - Owner and target item of the new favorite
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite with its assigned id
    /// - `Err(AppError::DbErr)` - Insert failed, including unique violations
    pub async fn create(&self, key: FavoriteKey) -> Result<Favorite, AppError> {
        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(key.user_id),
            item_type: ActiveValue::Set(key.item_type.as_str().to_string()),
            item_id: ActiveValue::Set(key.item_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Favorite::from_entity(entity)
    }

    /// Deletes the favorite matching a key.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No matching favorite existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, key: FavoriteKey) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(key.user_id))
            .filter(entity::favorite::Column::ItemType.eq(key.item_type.as_str()))
            .filter(entity::favorite::Column::ItemId.eq(key.item_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    fn filter_by_key(
        select: sea_orm::Select<entity::prelude::Favorite>,
        key: FavoriteKey,
    ) -> sea_orm::Select<entity::prelude::Favorite> {
        select
            .filter(entity::favorite::Column::UserId.eq(key.user_id))
            .filter(entity::favorite::Column::ItemType.eq(key.item_type.as_str()))
            .filter(entity::favorite::Column::ItemId.eq(key.item_id))
    }
}
