use super::*;

/// Tests listing planets from an empty catalog.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_planets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let result = repo.get_all().await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests listing planets in id order.
///
/// Expected: Ok with planets sorted by id
#[tokio::test]
async fn returns_all_planets_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_planet(db).await?;
    let second = factory::create_planet(db).await?;
    let third = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
