use super::*;

/// Tests finding an existing character.
///
/// Expected: Ok(Some) with all stored attributes
#[tokio::test]
async fn finds_existing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::character::CharacterFactory::new(db)
        .name("Han Solo")
        .gender("male")
        .homeworld("Corellia")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let result = repo.find_by_id(created.id).await?;

    assert!(result.is_some());
    let character = result.unwrap();
    assert_eq!(character.name, "Han Solo");
    assert_eq!(character.gender.as_deref(), Some("male"));
    assert_eq!(character.homeworld.as_deref(), Some("Corellia"));
    assert!(character.films.is_none());

    Ok(())
}

/// Tests finding a character id that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let result = repo.find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
