use super::*;

fn params(vehicle_id: i32) -> CreateExpenseParams {
    CreateExpenseParams {
        vehicle_id,
        trip_id: None,
        amount: 12.5,
        description: Some("Bridge toll".to_string()),
        expense_date: Utc::now().date_naive(),
    }
}

/// Tests recording an expense for an unknown vehicle.
///
/// Expected: Err(AppError::NotFound("Vehicle not found.")) and nothing stored
#[tokio::test]
async fn unknown_vehicle_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ExpenseService::new(db);
    let result = service.create(params(404)).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Vehicle not found."));
    assert!(service.get_all(None).await.unwrap().is_empty());

    Ok(())
}

/// Tests recording an expense without a trip.
///
/// Expected: Ok with the vehicle name joined and the expense listed for the vehicle
#[tokio::test]
async fn records_expense() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::create_vehicle(db).await?;

    let service = ExpenseService::new(db);
    let expense = service.create(params(vehicle.id)).await.unwrap();

    assert_eq!(expense.amount, 12.5);
    assert_eq!(expense.vehicle_name, Some(vehicle.name));

    let listed = service.get_all(Some(vehicle.id)).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, expense.id);

    Ok(())
}
