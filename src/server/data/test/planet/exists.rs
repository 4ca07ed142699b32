use super::*;

/// Tests existence checks for present and absent planets.
///
/// Expected: true for the stored id, false otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);

    assert!(repo.exists(planet.id).await?);
    assert!(!repo.exists(planet.id + 1).await?);

    Ok(())
}
