use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DashboardDto {
    /// Vehicles currently on a trip.
    pub active_fleet: u64,
    /// Vehicles currently in the shop.
    pub maintenance_alerts: u64,
    /// Vehicles not out of service.
    pub total_vehicles: u64,
    /// Percentage of in-service vehicles that are on a trip or in the shop.
    pub utilization_rate: u64,
    /// Trips still in draft.
    pub pending_cargo: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OperationalCostDto {
    pub id: i32,
    pub name: String,
    pub license_plate: String,
    pub fuel_cost: f64,
    pub maintenance_cost: f64,
    pub total_operational_cost: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FuelEfficiencyDto {
    pub id: i32,
    pub name: String,
    pub license_plate: String,
    pub total_liters: f64,
    pub total_fuel_cost: f64,
    /// Distance covered by completed trips with both odometer readings.
    pub distance_km: f64,
    pub km_per_liter: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct VehicleCostReportDto {
    pub id: i32,
    pub name: String,
    pub license_plate: String,
    pub fuel_total: f64,
    pub maintenance_total: f64,
    pub expense_total: f64,
}
