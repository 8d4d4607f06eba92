use super::*;

/// Tests listing fuel logs newest first with a vehicle filter.
///
/// Expected: the requested vehicle's logs by descending fuel date
#[tokio::test]
async fn lists_vehicle_logs_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await?;
    let other = factory::vehicle::create_vehicle(db).await?;
    let older = factory::fuel_log::create_fuel_log_on(
        db,
        vehicle.id,
        30.0,
        45.0,
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
    )
    .await?;
    let newer = factory::fuel_log::create_fuel_log_on(
        db,
        vehicle.id,
        40.0,
        60.0,
        NaiveDate::from_ymd_opt(2026, 5, 9).unwrap(),
    )
    .await?;
    factory::fuel_log::create_fuel_log(db, other.id, 10.0, 15.0).await?;

    let repo = FuelLogRepository::new(db);
    let logs = repo.get_all(Some(vehicle.id)).await?;

    let ids: Vec<i32> = logs.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(logs[0].vehicle_name, Some(vehicle.name));

    Ok(())
}
