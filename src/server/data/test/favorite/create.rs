use sea_orm::{EntityTrait, PaginatorTrait, SqlErr};

use super::*;

/// Tests creating a favorite.
///
/// Expected: Ok with the stored key and a fresh id
#[tokio::test]
async fn creates_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo
        .create(FavoriteKey::new(user.id, ItemType::Planet, 5))
        .await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.item_type, ItemType::Planet);
    assert_eq!(favorite.item_id, 5);

    let stored = entity::prelude::Favorite::find_by_id(favorite.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.item_type, "planet");

    Ok(())
}

/// Tests that the unique index rejects a second identical favorite.
///
/// The repository does not pre-check, so the insert reaches the database and fails
/// with a unique constraint violation.
///
/// Expected: Err(DbErr) classified as UniqueConstraintViolation, one row stored
#[tokio::test]
async fn duplicate_violates_unique_index() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let key = FavoriteKey::new(user.id, ItemType::Character, 1);

    let repo = FavoriteRepository::new(db);
    repo.create(key).await?;
    let result = repo.create(key).await;

    match result {
        Err(AppError::DbErr(err)) => assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        )),
        other => panic!("expected unique violation, got {:?}", other),
    }

    let count = entity::prelude::Favorite::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the same item can be a favorite of different users and kinds.
///
/// Expected: Ok for all three inserts
#[tokio::test]
async fn allows_same_item_for_other_user_or_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    repo.create(FavoriteKey::new(user.id, ItemType::Planet, 1))
        .await?;
    repo.create(FavoriteKey::new(other.id, ItemType::Planet, 1))
        .await?;
    repo.create(FavoriteKey::new(user.id, ItemType::Character, 1))
        .await?;

    let count = entity::prelude::Favorite::find().count(db).await?;
    assert_eq!(count, 3);

    Ok(())
}
