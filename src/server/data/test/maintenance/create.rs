use super::*;

/// Tests inserting a maintenance log.
///
/// Verifies that the log is stored as given and that the repository itself leaves
/// the vehicle status alone.
///
/// Expected: Ok with the stored fields, vehicle still available
#[tokio::test]
async fn creates_log() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await?;
    let service_date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

    let repo = MaintenanceLogRepository::new(db);
    let log = repo
        .create(CreateMaintenanceLogParams {
            vehicle_id: vehicle.id,
            description: "Brake pads".to_string(),
            cost: 320.0,
            service_date,
            created_by: None,
        })
        .await?;

    assert_eq!(log.vehicle_id, vehicle.id);
    assert_eq!(log.description, "Brake pads");
    assert_eq!(log.cost, 320.0);
    assert_eq!(log.service_date, service_date);

    let stored = crate::server::data::vehicle::VehicleRepository::new(db)
        .find_by_id(vehicle.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, crate::model::vehicle::VehicleStatus::Available);

    Ok(())
}
