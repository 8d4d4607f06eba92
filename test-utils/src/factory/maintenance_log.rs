//! Maintenance log factory.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a maintenance log with the given cost, dated today.
///
/// Unlike the service operation this does not move the vehicle into the shop.
pub async fn create_maintenance_log(
    db: &DatabaseConnection,
    vehicle_id: i32,
    cost: f64,
) -> Result<entity::maintenance_log::Model, DbErr> {
    create_maintenance_log_on(db, vehicle_id, cost, Utc::now().date_naive()).await
}

/// Creates a maintenance log with the given cost and service date.
pub async fn create_maintenance_log_on(
    db: &DatabaseConnection,
    vehicle_id: i32,
    cost: f64,
    service_date: NaiveDate,
) -> Result<entity::maintenance_log::Model, DbErr> {
    entity::maintenance_log::ActiveModel {
        vehicle_id: ActiveValue::Set(vehicle_id),
        description: ActiveValue::Set("Routine service".to_string()),
        cost: ActiveValue::Set(cost),
        service_date: ActiveValue::Set(service_date),
        created_by: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
