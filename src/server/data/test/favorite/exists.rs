use super::*;

/// Tests matching a favorite on its full key.
///
/// Expected: true for the exact key, false when only the item type differs
#[tokio::test]
async fn matches_on_full_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, planet, _) = factory::helpers::create_user_with_favorite_planet(db).await?;

    let repo = FavoriteRepository::new(db);

    assert!(
        repo.exists(FavoriteKey::new(user.id, ItemType::Planet, planet.id))
            .await?
    );
    assert!(
        !repo
            .exists(FavoriteKey::new(user.id, ItemType::Character, planet.id))
            .await?
    );

    Ok(())
}

/// Tests that favorites are scoped to their owner.
///
/// Expected: false when another user checks the same item
#[tokio::test]
async fn does_not_match_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, planet, _) = factory::helpers::create_user_with_favorite_planet(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let result = repo
        .exists(FavoriteKey::new(stranger.id, ItemType::Planet, planet.id))
        .await?;

    assert!(!result);

    Ok(())
}
