use super::*;

/// Tests dispatching a draft trip.
///
/// Verifies that the vehicle goes on trip, the driver goes on duty, and the trip
/// records the vehicle's odometer as its start reading.
///
/// Expected: statuses flipped and start_odometer equal to the vehicle odometer
#[tokio::test]
async fn dispatch_flips_vehicle_and_driver() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .odometer(12_000.0)
        .build()
        .await?;
    let driver = factory::driver::create_driver(db).await?;
    let trip = factory::trip::create_trip(db, vehicle.id, driver.id).await?;

    let service = TripService::new(db);
    let detail = service
        .change_status(trip.id, change(TripStatus::Dispatched, None))
        .await
        .unwrap();

    assert_eq!(detail.trip.status, TripStatus::Dispatched);
    assert_eq!(detail.trip.start_odometer, Some(12_000.0));
    assert_eq!(vehicle_row(db, vehicle.id).await?.status, "on_trip");
    assert_eq!(driver_row(db, driver.id).await?.status, "on_duty");

    Ok(())
}

/// Tests completing a dispatched trip.
///
/// Verifies that the driver's counter goes up by exactly one, the vehicle returns
/// available with the final odometer, and the trip records completion.
///
/// Expected: trips_completed 2 → 3, vehicle odometer 1250, completed_at set
#[tokio::test]
async fn complete_increments_driver_counter_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .odometer(1000.0)
        .status("on_trip")
        .build()
        .await?;
    let driver = factory::driver::DriverFactory::new(db)
        .status("on_duty")
        .trips_completed(2)
        .build()
        .await?;
    let trip = factory::trip::create_trip_with_status(db, vehicle.id, driver.id, "dispatched")
        .await?;

    let service = TripService::new(db);
    let detail = service
        .change_status(trip.id, change(TripStatus::Completed, Some(1250.0)))
        .await
        .unwrap();

    assert_eq!(detail.trip.status, TripStatus::Completed);
    assert_eq!(detail.trip.end_odometer, Some(1250.0));
    assert!(detail.trip.completed_at.is_some());

    let vehicle = vehicle_row(db, vehicle.id).await?;
    assert_eq!(vehicle.status, "available");
    assert_eq!(vehicle.odometer, 1250.0);

    let driver = driver_row(db, driver.id).await?;
    assert_eq!(driver.status, "off_duty");
    assert_eq!(driver.trips_completed, 3);

    Ok(())
}

/// Tests completing without a final odometer reading.
///
/// Expected: vehicle odometer unchanged
#[tokio::test]
async fn complete_without_odometer_keeps_vehicle_reading() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .odometer(640.0)
        .status("on_trip")
        .build()
        .await?;
    let driver = factory::driver::create_driver_with_status(db, "on_duty").await?;
    let trip = factory::trip::create_trip_with_status(db, vehicle.id, driver.id, "dispatched")
        .await?;

    let service = TripService::new(db);
    service
        .change_status(trip.id, change(TripStatus::Completed, None))
        .await
        .unwrap();

    assert_eq!(vehicle_row(db, vehicle.id).await?.odometer, 640.0);

    Ok(())
}

/// Tests completing with a final reading behind the dispatch reading.
///
/// Expected: Err(TripError::EndOdometerTooLow) with the trip still dispatched, the
/// vehicle on its trip at the old reading and the driver counter unchanged
#[tokio::test]
async fn complete_rejects_end_odometer_below_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .odometer(800.0)
        .build()
        .await?;
    let driver = factory::driver::create_driver(db).await?;
    let trip = factory::trip::create_trip(db, vehicle.id, driver.id).await?;

    let service = TripService::new(db);
    let dispatched = service
        .change_status(trip.id, change(TripStatus::Dispatched, None))
        .await
        .unwrap();
    assert_eq!(dispatched.trip.start_odometer, Some(800.0));

    let result = service
        .change_status(trip.id, change(TripStatus::Completed, Some(750.0)))
        .await;

    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::EndOdometerTooLow {
            end_odometer,
            minimum,
        })) if end_odometer == 750.0 && minimum == 800.0
    ));

    let row = trip_row(db, trip.id).await?;
    assert_eq!(row.status, "dispatched");
    assert_eq!(row.end_odometer, None);

    let vehicle = vehicle_row(db, vehicle.id).await?;
    assert_eq!(vehicle.status, "on_trip");
    assert_eq!(vehicle.odometer, 800.0);

    let driver = driver_row(db, driver.id).await?;
    assert_eq!(driver.status, "on_duty");
    assert_eq!(driver.trips_completed, 0);

    Ok(())
}

/// Tests cancelling a dispatched trip.
///
/// Expected: vehicle available, driver off duty, trip cancelled, counter unchanged
#[tokio::test]
async fn cancel_releases_vehicle_and_driver() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle_with_status(db, "on_trip").await?;
    let driver = factory::driver::create_driver_with_status(db, "on_duty").await?;
    let trip = factory::trip::create_trip_with_status(db, vehicle.id, driver.id, "dispatched")
        .await?;

    let service = TripService::new(db);
    let detail = service
        .change_status(trip.id, change(TripStatus::Cancelled, None))
        .await
        .unwrap();

    assert_eq!(detail.trip.status, TripStatus::Cancelled);
    assert_eq!(vehicle_row(db, vehicle.id).await?.status, "available");

    let driver = driver_row(db, driver.id).await?;
    assert_eq!(driver.status, "off_duty");
    assert_eq!(driver.trips_completed, 0);

    Ok(())
}

/// Tests transitions outside the lifecycle.
///
/// Verifies that completing a draft and dispatching a completed trip fail with a
/// conflict and leave the trip, vehicle and driver rows untouched.
///
/// Expected: Err(TripError::InvalidTransition) and identical rows before and after
#[tokio::test]
async fn invalid_transition_leaves_rows_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (vehicle, driver, draft) = factory::helpers::create_trip_with_dependencies(db).await?;
    let completed =
        factory::trip::create_trip_with_status(db, vehicle.id, driver.id, "completed").await?;

    let vehicle_before = vehicle_row(db, vehicle.id).await?;
    let driver_before = driver_row(db, driver.id).await?;

    let service = TripService::new(db);

    let result = service
        .change_status(draft.id, change(TripStatus::Completed, Some(99.0)))
        .await;
    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::InvalidTransition {
            from: TripStatus::Draft,
            to: TripStatus::Completed
        }))
    ));

    let result = service
        .change_status(completed.id, change(TripStatus::Dispatched, None))
        .await;
    assert!(matches!(
        result,
        Err(AppError::TripErr(TripError::InvalidTransition { .. }))
    ));

    assert_eq!(trip_row(db, draft.id).await?, draft);
    assert_eq!(trip_row(db, completed.id).await?, completed);
    assert_eq!(vehicle_row(db, vehicle.id).await?, vehicle_before);
    assert_eq!(driver_row(db, driver.id).await?, driver_before);

    Ok(())
}

/// Tests a transition whose side effect fails part way.
///
/// The trip's driver row is removed with foreign key checks off, so completing the
/// trip fails after the vehicle has already been updated inside the transaction.
///
/// Expected: Err and the vehicle row rolled back to its prior state
#[tokio::test]
async fn failed_side_effect_rolls_back_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .odometer(300.0)
        .status("on_trip")
        .build()
        .await?;
    let driver = factory::driver::create_driver_with_status(db, "on_duty").await?;
    let trip = factory::trip::create_trip_with_status(db, vehicle.id, driver.id, "dispatched")
        .await?;
    db.execute_unprepared("PRAGMA foreign_keys = OFF").await?;
    entity::prelude::Driver::delete_by_id(driver.id)
        .exec(db)
        .await?;

    let vehicle_before = vehicle_row(db, vehicle.id).await?;

    let service = TripService::new(db);
    let result = service
        .change_status(trip.id, change(TripStatus::Completed, Some(900.0)))
        .await;

    assert!(result.is_err());
    assert_eq!(vehicle_row(db, vehicle.id).await?, vehicle_before);
    assert_eq!(trip_row(db, trip.id).await?.status, "dispatched");

    Ok(())
}

/// Tests changing the status of a missing trip.
///
/// Expected: Err(AppError::NotFound("Trip not found."))
#[tokio::test]
async fn missing_trip_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trip_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TripService::new(db);
    let result = service
        .change_status(404, change(TripStatus::Dispatched, None))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Trip not found."));

    Ok(())
}
