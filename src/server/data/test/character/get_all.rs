use super::*;

/// Tests listing characters from an empty catalog.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);
    let result = repo.get_all().await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests listing characters in id order.
///
/// Verifies that every stored character is returned, ordered by primary key.
///
/// Expected: Ok with characters sorted by id
#[tokio::test]
async fn returns_all_characters_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::character::CharacterFactory::new(db)
        .name("Luke Skywalker")
        .build()
        .await?;
    let leia = factory::character::CharacterFactory::new(db)
        .name("Leia Organa")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let result = repo.get_all().await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id, luke.id);
    assert_eq!(result[0].name, "Luke Skywalker");
    assert_eq!(result[1].id, leia.id);

    Ok(())
}
