use super::*;

/// Tests registering a new driver.
///
/// Verifies that new drivers start with a full safety score and no completed trips.
///
/// Expected: Ok with safety_score 100 and trips_completed 0
#[tokio::test]
async fn creates_driver_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Driver)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DriverRepository::new(db);
    let driver = repo
        .create(CreateDriverParams {
            full_name: "Sam Driver".to_string(),
            license_number: Some("DL-100".to_string()),
            license_expiry: None,
            license_category: Some("C".to_string()),
            status: DriverStatus::OffDuty,
        })
        .await?;

    assert_eq!(driver.full_name, "Sam Driver");
    assert_eq!(driver.status, DriverStatus::OffDuty);
    assert_eq!(driver.safety_score, 100.0);
    assert_eq!(driver.trips_completed, 0);

    Ok(())
}
