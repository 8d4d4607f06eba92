use super::*;

/// Tests listing maintenance logs newest service date first.
///
/// Expected: logs ordered by service date descending, with vehicle name and plate
#[tokio::test]
async fn lists_newest_service_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await?;
    let older = factory::maintenance_log::create_maintenance_log_on(
        db,
        vehicle.id,
        50.0,
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
    )
    .await?;
    let newer = factory::maintenance_log::create_maintenance_log_on(
        db,
        vehicle.id,
        80.0,
        NaiveDate::from_ymd_opt(2026, 2, 5).unwrap(),
    )
    .await?;

    let repo = MaintenanceLogRepository::new(db);
    let logs = repo.get_all(None).await?;

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].id, newer.id);
    assert_eq!(logs[1].id, older.id);
    assert_eq!(logs[0].vehicle_name, Some(vehicle.name.clone()));
    assert_eq!(logs[0].license_plate, Some(vehicle.license_plate.clone()));

    Ok(())
}

/// Tests filtering maintenance logs by vehicle.
///
/// Expected: only the logs of the requested vehicle
#[tokio::test]
async fn filters_by_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::vehicle::create_vehicle(db).await?;
    let second = factory::vehicle::create_vehicle(db).await?;
    factory::maintenance_log::create_maintenance_log(db, first.id, 10.0).await?;
    let wanted = factory::maintenance_log::create_maintenance_log(db, second.id, 20.0).await?;

    let repo = MaintenanceLogRepository::new(db);
    let logs = repo.get_all(Some(second.id)).await?;

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].id, wanted.id);

    Ok(())
}
