//! Favorite factory for inserting favorites directly, bypassing service checks.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a favorite row.
///
/// No existence or duplicate checks are performed, which lets tests arrange states the
/// service layer would refuse to create.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user's ID (must exist)
/// - `item_type` - Stored item type string (`"character"` or `"planet"`)
/// - `item_id` - Catalog item ID
///
/// # Returns
/// - `Ok(entity::favorite::Model)` - Created favorite entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    item_type: &str,
    item_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        item_type: ActiveValue::Set(item_type.to_string()),
        item_id: ActiveValue::Set(item_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
