use super::*;

/// Tests the fleet counters behind the dashboard.
///
/// Verifies per-status vehicle counts, the in-service count excluding vehicles
/// out of service, and the draft trip count.
///
/// Expected: 1 on trip, 1 in shop, 3 in service, 1 draft trip
#[tokio::test]
async fn counts_vehicles_and_trips_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let on_trip = factory::vehicle::create_vehicle_with_status(db, "on_trip").await?;
    factory::vehicle::create_vehicle_with_status(db, "in_shop").await?;
    factory::vehicle::create_vehicle(db).await?;
    factory::vehicle::create_vehicle_with_status(db, "out_of_service").await?;

    let driver = factory::driver::create_driver(db).await?;
    factory::trip::create_trip(db, on_trip.id, driver.id).await?;
    factory::trip::create_trip_with_status(db, on_trip.id, driver.id, "dispatched").await?;

    let repo = AnalyticsRepository::new(db);

    assert_eq!(
        repo.count_vehicles_with_status(VehicleStatus::OnTrip).await?,
        1
    );
    assert_eq!(
        repo.count_vehicles_with_status(VehicleStatus::InShop).await?,
        1
    );
    assert_eq!(repo.count_vehicles_in_service().await?, 3);
    assert_eq!(repo.count_trips_with_status(TripStatus::Draft).await?, 1);

    Ok(())
}
