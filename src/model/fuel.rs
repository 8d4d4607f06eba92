use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FuelLogDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub trip_id: Option<i32>,
    pub liters: f64,
    pub cost: f64,
    pub fuel_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub vehicle_name: Option<String>,
    pub license_plate: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateFuelLogDto {
    pub vehicle_id: Option<i32>,
    pub trip_id: Option<i32>,
    pub liters: Option<f64>,
    pub cost: Option<f64>,
    pub fuel_date: Option<NaiveDate>,
}
