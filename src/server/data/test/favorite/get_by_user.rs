use super::*;

/// Tests listing favorites for a user without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_user_without_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let result = repo.get_by_user(user.id).await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that only the requesting user's favorites are returned, in insertion order.
///
/// Expected: Ok with the user's two favorites, the other user's excluded
#[tokio::test]
async fn returns_only_owned_favorites_in_insertion_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_favorite(db, user.id, "planet", 5).await?;
    factory::create_favorite(db, other.id, "planet", 5).await?;
    factory::create_favorite(db, user.id, "character", 1).await?;

    let repo = FavoriteRepository::new(db);
    let result = repo.get_by_user(user.id).await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].item_type, ItemType::Planet);
    assert_eq!(result[0].item_id, 5);
    assert_eq!(result[1].item_type, ItemType::Character);
    assert_eq!(result[1].item_id, 1);
    assert!(result.iter().all(|f| f.user_id == user.id));

    Ok(())
}

/// Tests that a corrupted item type surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_item_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_favorite(db, user.id, "starship", 9).await?;

    let repo = FavoriteRepository::new(db);
    let result = repo.get_by_user(user.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
