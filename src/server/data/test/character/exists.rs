use super::*;

/// Tests existence checks for present and absent characters.
///
/// Expected: true for the stored id, false for any other
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);

    assert!(repo.exists(character.id).await?);
    assert!(!repo.exists(character.id + 100).await?);

    Ok(())
}
