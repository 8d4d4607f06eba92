use super::*;

/// Tests inserting an expense without a trip.
///
/// Expected: Ok with amount and description stored and no trip ID
#[tokio::test]
async fn creates_expense() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await?;

    let repo = ExpenseRepository::new(db);
    let expense = repo
        .create(CreateExpenseParams {
            vehicle_id: vehicle.id,
            trip_id: None,
            amount: 42.0,
            description: Some("Toll".to_string()),
            expense_date: NaiveDate::from_ymd_opt(2026, 6, 2).unwrap(),
        })
        .await?;

    assert_eq!(expense.vehicle_id, vehicle.id);
    assert_eq!(expense.amount, 42.0);
    assert_eq!(expense.description.as_deref(), Some("Toll"));
    assert!(expense.trip_id.is_none());

    Ok(())
}
