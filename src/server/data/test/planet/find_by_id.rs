use super::*;

/// Tests finding an existing planet.
///
/// Expected: Ok(Some) with numeric attributes preserved
#[tokio::test]
async fn finds_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::planet::PlanetFactory::new(db)
        .name("Hoth")
        .diameter(7200)
        .climate("frozen")
        .build()
        .await?;

    let repo = PlanetRepository::new(db);
    let planet = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(planet.name, "Hoth");
    assert_eq!(planet.diameter, Some(7200));
    assert_eq!(planet.climate.as_deref(), Some("frozen"));
    assert!(planet.rotation_period.is_none());

    Ok(())
}

/// Tests finding a planet id that was never stored.
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

    let repo = PlanetRepository::new(db);
    let result = repo.find_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}
