use super::*;

fn params(vehicle_id: i32) -> CreateMaintenanceLogParams {
    CreateMaintenanceLogParams {
        vehicle_id,
        description: "Oil change".to_string(),
        cost: 90.0,
        service_date: Utc::now().date_naive(),
        created_by: None,
    }
}

/// Tests logging maintenance for a vehicle.
///
/// Expected: Ok with the vehicle's name and plate, vehicle moved to in_shop
#[tokio::test]
async fn moves_vehicle_to_shop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await?;

    let service = MaintenanceService::new(db);
    let log = service.create(params(vehicle.id)).await.unwrap();

    assert_eq!(log.vehicle_name, Some(vehicle.name.clone()));
    assert_eq!(log.license_plate, Some(vehicle.license_plate.clone()));

    let stored = entity::prelude::Vehicle::find_by_id(vehicle.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "in_shop");

    Ok(())
}

/// Tests logging maintenance for a missing vehicle.
///
/// Expected: Err(AppError::NotFound) and no log row
#[tokio::test]
async fn missing_vehicle_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MaintenanceService::new(db);
    let result = service.create(params(77)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(entity::prelude::MaintenanceLog::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}
