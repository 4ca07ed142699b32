use super::*;

/// Tests listing users when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.get_all().await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests listing users including inactive accounts.
///
/// Verifies that inactive users are still listed and that the list follows id order.
///
/// Expected: Ok with both users, second one inactive
#[tokio::test]
async fn returns_all_users_including_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_user(db).await?;
    let inactive = factory::user::UserFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.get_all().await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id, active.id);
    assert!(result[0].is_active);
    assert_eq!(result[1].id, inactive.id);
    assert!(!result[1].is_active);

    Ok(())
}
