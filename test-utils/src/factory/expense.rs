//! Expense factory.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an expense for a vehicle, dated today and not tied to a trip.
pub async fn create_expense(
    db: &DatabaseConnection,
    vehicle_id: i32,
    amount: f64,
) -> Result<entity::expense::Model, DbErr> {
    create_expense_on(db, vehicle_id, amount, Utc::now().date_naive()).await
}

/// Creates an expense for a vehicle on the given date.
pub async fn create_expense_on(
    db: &DatabaseConnection,
    vehicle_id: i32,
    amount: f64,
    expense_date: NaiveDate,
) -> Result<entity::expense::Model, DbErr> {
    entity::expense::ActiveModel {
        vehicle_id: ActiveValue::Set(vehicle_id),
        trip_id: ActiveValue::Set(None),
        amount: ActiveValue::Set(amount),
        description: ActiveValue::Set(Some("Tolls".to_string())),
        expense_date: ActiveValue::Set(expense_date),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
