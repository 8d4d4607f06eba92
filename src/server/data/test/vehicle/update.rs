use super::*;

/// Tests a partial vehicle update.
///
/// Verifies that provided fields change while omitted fields keep their values.
///
/// Expected: Ok(Some) with the new status and odometer, name unchanged
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .name("Truck 7")
        .build()
        .await?;

    let repo = VehicleRepository::new(db);
    let updated = repo
        .update(
            vehicle.id,
            UpdateVehicleParams {
                odometer: Some(1500.0),
                status: Some(VehicleStatus::OutOfService),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Truck 7");
    assert_eq!(updated.odometer, 1500.0);
    assert_eq!(updated.status, VehicleStatus::OutOfService);

    Ok(())
}

/// Tests updating a vehicle that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let result = repo
        .update(
            999,
            UpdateVehicleParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
