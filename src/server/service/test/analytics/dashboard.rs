use super::*;

/// Tests the dashboard on an empty fleet.
///
/// Expected: all counters zero, utilization 0 rather than a division by zero
#[tokio::test]
async fn empty_fleet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dto = AnalyticsService::new(db).dashboard().await.unwrap().into_dto();

    assert_eq!(dto.total_vehicles, 0);
    assert_eq!(dto.utilization_rate, 0);

    Ok(())
}

/// Tests the dashboard counters with vehicles in every status and a draft trip.
///
/// Verifies that out-of-service vehicles are excluded from the fleet total.
///
/// Expected: active 1, alerts 1, total 3, utilization 67, pending 1
#[tokio::test]
async fn counts_fleet_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::vehicle::create_vehicle_with_status(db, "on_trip").await?;
    factory::vehicle::create_vehicle_with_status(db, "in_shop").await?;
    factory::vehicle::create_vehicle_with_status(db, "out_of_service").await?;
    // The helper adds one available vehicle and one draft trip.
    factory::helpers::create_trip_with_dependencies(db).await?;

    let dto = AnalyticsService::new(db).dashboard().await.unwrap().into_dto();

    assert_eq!(dto.active_fleet, 1);
    assert_eq!(dto.maintenance_alerts, 1);
    assert_eq!(dto.total_vehicles, 3);
    assert_eq!(dto.utilization_rate, 67);
    assert_eq!(dto.pending_cargo, 1);

    Ok(())
}
