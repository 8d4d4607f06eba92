//! Fuel log factory.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a fuel log for a vehicle, dated today and not tied to a trip.
pub async fn create_fuel_log(
    db: &DatabaseConnection,
    vehicle_id: i32,
    liters: f64,
    cost: f64,
) -> Result<entity::fuel_log::Model, DbErr> {
    create_fuel_log_on(db, vehicle_id, liters, cost, Utc::now().date_naive()).await
}

/// Creates a fuel log for a vehicle on the given date.
pub async fn create_fuel_log_on(
    db: &DatabaseConnection,
    vehicle_id: i32,
    liters: f64,
    cost: f64,
    fuel_date: NaiveDate,
) -> Result<entity::fuel_log::Model, DbErr> {
    entity::fuel_log::ActiveModel {
        vehicle_id: ActiveValue::Set(vehicle_id),
        trip_id: ActiveValue::Set(None),
        liters: ActiveValue::Set(liters),
        cost: ActiveValue::Set(cost),
        fuel_date: ActiveValue::Set(fuel_date),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
