use super::*;

/// Tests loading credentials by username.
///
/// Verifies that the stored hash is returned alongside the user.
///
/// Expected: Ok(Some) with the stored password hash
#[tokio::test]
async fn returns_stored_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("yoda")
        .password_hash("$argon2id$stored")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_username("yoda").await?.unwrap();

    assert_eq!(credentials.user.username, "yoda");
    assert_eq!(credentials.password_hash, "$argon2id$stored");

    Ok(())
}

/// Tests looking up a username that is not stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("yoda")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_credentials_by_username("vader").await?.is_none());

    Ok(())
}
