use super::*;

/// Tests editing route fields only.
///
/// Expected: Ok(Some) with the new destination and the guards not consulted
#[tokio::test]
async fn updates_route_without_guard_checks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await?;
    let driver = factory::driver::create_driver(db).await?;
    let trip = factory::trip::create_trip(db, vehicle.id, driver.id).await?;

    // Suspended after assignment; a route edit must still go through.
    entity::prelude::Driver::update(entity::driver::ActiveModel {
        id: sea_orm::ActiveValue::Unchanged(driver.id),
        status: sea_orm::ActiveValue::Set("suspended".to_string()),
        ..Default::default()
    })
    .exec(db)
    .await?;

    let service = TripService::new(db);
    let detail = service
        .update(
            trip.id,
            UpdateTripParams {
                destination: Some("North Yard".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(detail.trip.destination.as_deref(), Some("North Yard"));

    Ok(())
}

/// Tests raising the cargo above the vehicle's capacity.
///
/// Expected: Err(TripError::CapacityExceeded) and the stored cargo unchanged
#[tokio::test]
async fn rechecks_capacity_when_cargo_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_vehicle, _driver, trip) = factory::helpers::create_trip_with_dependencies(db).await?;

    let service = TripService::new(db);
    let result = service
        .update(
            trip.id,
            UpdateTripParams {
                cargo_weight_kg: Some(5000.0),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::CapacityExceeded { .. }))
    ));
    assert_eq!(trip_row(db, trip.id).await?.cargo_weight_kg, trip.cargo_weight_kg);

    Ok(())
}

/// Tests swapping in a suspended driver.
///
/// Expected: Err(TripError::DriverSuspended)
#[tokio::test]
async fn rechecks_driver_when_driver_changes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_vehicle, _driver, trip) = factory::helpers::create_trip_with_dependencies(db).await?;
    let suspended = factory::driver::create_driver_with_status(db, "suspended").await?;

    let service = TripService::new(db);
    let result = service
        .update(
            trip.id,
            UpdateTripParams {
                driver_id: Some(suspended.id),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::DriverSuspended))
    ));
    assert_eq!(trip_row(db, trip.id).await?.driver_id, trip.driver_id);

    Ok(())
}

/// Tests moving a dispatched trip onto another vehicle.
///
/// Expected: Err(TripError::AssignmentLocked(Dispatched)), the trip keeps its
/// vehicle and the other vehicle stays available
#[tokio::test]
async fn refuses_vehicle_change_after_dispatch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (vehicle, _driver, trip) = factory::helpers::create_trip_with_dependencies(db).await?;
    let spare = factory::vehicle::create_vehicle(db).await?;

    let service = TripService::new(db);
    service
        .change_status(trip.id, change(TripStatus::Dispatched, None))
        .await
        .unwrap();

    let result = service
        .update(
            trip.id,
            UpdateTripParams {
                vehicle_id: Some(spare.id),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::AssignmentLocked(
            TripStatus::Dispatched
        )))
    ));
    assert_eq!(trip_row(db, trip.id).await?.vehicle_id, vehicle.id);
    assert_eq!(vehicle_row(db, vehicle.id).await?.status, "on_trip");
    assert_eq!(vehicle_row(db, spare.id).await?.status, "available");

    Ok(())
}

/// Tests changing driver and cargo on a completed trip.
///
/// Expected: Err(TripError::AssignmentLocked(Completed)) and the stored row unchanged
#[tokio::test]
async fn refuses_assignment_change_on_completed_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await?;
    let driver = factory::driver::create_driver(db).await?;
    let other = factory::driver::create_driver(db).await?;
    let trip = factory::trip::create_trip_with_status(db, vehicle.id, driver.id, "completed")
        .await?;

    let service = TripService::new(db);
    let result = service
        .update(
            trip.id,
            UpdateTripParams {
                driver_id: Some(other.id),
                cargo_weight_kg: Some(1.0),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::AssignmentLocked(
            TripStatus::Completed
        )))
    ));
    let row = trip_row(db, trip.id).await?;
    assert_eq!(row.driver_id, driver.id);
    assert_eq!(row.cargo_weight_kg, trip.cargo_weight_kg);

    Ok(())
}

/// Tests editing a trip that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TripService::new(db);
    let result = service.update(3, UpdateTripParams::default()).await.unwrap();

    assert!(result.is_none());

    Ok(())
}
