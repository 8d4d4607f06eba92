use super::*;

/// Tests deleting an existing vehicle.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await?;

    let repo = VehicleRepository::new(db);
    assert!(repo.delete(vehicle.id).await?);
    assert!(repo.find_by_id(vehicle.id).await?.is_none());

    Ok(())
}

/// Tests deleting a vehicle that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    assert!(!repo.delete(42).await?);

    Ok(())
}
