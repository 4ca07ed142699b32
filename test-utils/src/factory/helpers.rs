//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep usernames, emails and catalog names distinct across factory calls.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user owning one favorite planet.
///
/// Convenience for tests that only need "some user with some favorite" and do not care
/// about the individual values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, planet, favorite))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_favorite_planet(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::planet::Model,
        entity::favorite::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;
    let favorite =
        crate::factory::favorite::create_favorite(db, user.id, "planet", planet.id).await?;

    Ok((user, planet, favorite))
}
