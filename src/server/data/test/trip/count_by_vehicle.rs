use super::*;

/// Tests counting trips that reference a vehicle.
///
/// Verifies that trips in every status count, and trips of other vehicles do not.
///
/// Expected: 2 for the used vehicle, 0 for the unused one
#[tokio::test]
async fn counts_trips_in_any_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (vehicle, driver, _trip) = factory::helpers::create_trip_with_dependencies(db).await?;
    factory::trip::create_trip_with_status(db, vehicle.id, driver.id, "cancelled").await?;
    let unused = factory::vehicle::create_vehicle(db).await?;

    let repo = TripRepository::new(db);
    assert_eq!(repo.count_by_vehicle(vehicle.id).await?, 2);
    assert_eq!(repo.count_by_vehicle(unused.id).await?, 0);

    Ok(())
}
