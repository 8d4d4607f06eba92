use super::*;

/// Tests registering and renaming onto a plate that is already in use.
///
/// Expected: Err(AppError::BadRequest("License plate already exists.")) for both
#[tokio::test]
async fn duplicate_plate_is_bad_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Vehicle)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::vehicle::VehicleFactory::new(db)
        .license_plate("PLATE-1")
        .build()
        .await?;
    let other = factory::vehicle::create_vehicle(db).await?;

    let service = VehicleService::new(db);

    let result = service
        .create(CreateVehicleParams {
            name: "Dup".to_string(),
            model: None,
            license_plate: "PLATE-1".to_string(),
            vehicle_type: "van".to_string(),
            max_capacity_kg: 100.0,
            odometer: 0.0,
            region: None,
        })
        .await;
    assert!(
        matches!(result, Err(AppError::BadRequest(msg)) if msg == "License plate already exists.")
    );

    let result = service
        .update(
            other.id,
            UpdateVehicleParams {
                license_plate: Some("PLATE-1".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(
        matches!(result, Err(AppError::BadRequest(msg)) if msg == "License plate already exists.")
    );

    Ok(())
}
