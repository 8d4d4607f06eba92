use super::*;

/// Tests per-vehicle totals across fuel, maintenance, expenses and trips.
///
/// Verifies that costs are summed per vehicle, that only completed trips with
/// both odometer readings count towards distance, and that a vehicle without any
/// records still appears with zero totals.
///
/// Expected: summed totals for the busy vehicle, zeros for the idle one
#[tokio::test]
async fn sums_costs_and_distance_per_vehicle() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::vehicle::create_vehicle(db).await?;
    let idle = factory::vehicle::create_vehicle(db).await?;
    let driver = factory::driver::create_driver(db).await?;

    factory::fuel_log::create_fuel_log(db, busy.id, 20.0, 30.0).await?;
    factory::fuel_log::create_fuel_log(db, busy.id, 30.0, 45.0).await?;
    factory::maintenance_log::create_maintenance_log(db, busy.id, 200.0).await?;
    factory::expense::create_expense(db, busy.id, 15.0).await?;

    factory::trip::TripFactory::new(db, busy.id, driver.id)
        .status("completed")
        .odometers(1000.0, 1400.0)
        .build()
        .await?;
    factory::trip::TripFactory::new(db, busy.id, driver.id)
        .status("dispatched")
        .odometers(1400.0, 1500.0)
        .build()
        .await?;
    factory::trip::TripFactory::new(db, busy.id, driver.id)
        .status("completed")
        .build()
        .await?;

    let repo = AnalyticsRepository::new(db);
    let totals = repo.vehicle_totals().await?;

    assert_eq!(totals.len(), 2);

    let busy_totals = &totals[0];
    assert_eq!(busy_totals.id, busy.id);
    assert_eq!(busy_totals.fuel_liters, 50.0);
    assert_eq!(busy_totals.fuel_cost, 75.0);
    assert_eq!(busy_totals.maintenance_cost, 200.0);
    assert_eq!(busy_totals.expense_total, 15.0);
    assert_eq!(busy_totals.distance_km, 400.0);

    let idle_totals = &totals[1];
    assert_eq!(idle_totals.id, idle.id);
    assert_eq!(idle_totals.license_plate, idle.license_plate);
    assert_eq!(idle_totals.fuel_cost, 0.0);
    assert_eq!(idle_totals.maintenance_cost, 0.0);
    assert_eq!(idle_totals.distance_km, 0.0);

    Ok(())
}
