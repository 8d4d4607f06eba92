use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct MaintenanceLogDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub description: String,
    pub cost: f64,
    pub service_date: NaiveDate,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub vehicle_name: Option<String>,
    pub license_plate: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateMaintenanceLogDto {
    pub vehicle_id: Option<i32>,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub service_date: Option<NaiveDate>,
}
