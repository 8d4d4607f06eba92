use super::*;

/// Tests filtering drivers by status.
///
/// Expected: only the suspended driver
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Driver)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::driver::create_driver(db).await?;
    let suspended = factory::driver::create_driver_with_status(db, "suspended").await?;
    factory::driver::create_driver_with_status(db, "on_duty").await?;

    let repo = DriverRepository::new(db);
    let drivers = repo.get_all(Some(DriverStatus::Suspended)).await?;

    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].id, suspended.id);

    let all = repo.get_all(None).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}
