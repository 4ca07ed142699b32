use sea_orm::{EntityTrait, ModelTrait};

use super::*;

/// Tests deleting an existing favorite.
///
/// Expected: Ok(true) the first time, Ok(false) on repeat
#[tokio::test]
async fn deletes_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, _) = factory::helpers::create_user_with_favorite_planet(db).await?;
    let key = FavoriteKey::new(user.id, ItemType::Planet, planet.id);

    let repo = FavoriteRepository::new(db);

    assert!(repo.delete(key).await?);
    assert!(!repo.delete(key).await?);
    assert!(!repo.exists(key).await?);

    Ok(())
}

/// Tests that deleting a user cascades to their favorites.
///
/// Expected: no favorites remain for the deleted user
#[tokio::test]
async fn user_deletion_cascades() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _) = factory::helpers::create_user_with_favorite_planet(db).await?;
    let user_id = user.id;

    user.delete(db).await?;

    let remaining = entity::prelude::Favorite::find().all(db).await?;
    assert!(remaining.iter().all(|f| f.user_id != user_id));
    assert!(remaining.is_empty());

    Ok(())
}
