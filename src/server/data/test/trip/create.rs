use super::*;

/// Tests inserting a trip.
///
/// Verifies that the trip starts as a draft with no odometer readings or
/// completion time.
///
/// Expected: Ok with status Draft
#[tokio::test]
async fn creates_draft_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await?;
    let driver = factory::driver::create_driver(db).await?;
    let user = factory::user::create_user(db).await?;

    let repo = TripRepository::new(db);
    let trip = repo
        .create(CreateTripParams {
            vehicle_id: vehicle.id,
            driver_id: driver.id,
            cargo_weight_kg: 450.0,
            origin: Some("Port".to_string()),
            destination: Some("Depot".to_string()),
            created_by: Some(user.id),
        })
        .await?;

    assert_eq!(trip.status, TripStatus::Draft);
    assert_eq!(trip.cargo_weight_kg, 450.0);
    assert_eq!(trip.created_by, Some(user.id));
    assert!(trip.start_odometer.is_none());
    assert!(trip.completed_at.is_none());

    Ok(())
}
