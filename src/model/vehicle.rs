use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    OnTrip,
    InShop,
    OutOfService,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 4] = [
        VehicleStatus::Available,
        VehicleStatus::OnTrip,
        VehicleStatus::InShop,
        VehicleStatus::OutOfService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::OnTrip => "on_trip",
            VehicleStatus::InShop => "in_shop",
            VehicleStatus::OutOfService => "out_of_service",
        }
    }

    /// Whether a new trip may be assigned to a vehicle in this status.
    pub fn is_assignable(&self) -> bool {
        matches!(self, VehicleStatus::Available | VehicleStatus::OnTrip)
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub license_plate: String,
    pub vehicle_type: String,
    pub max_capacity_kg: f64,
    pub odometer: f64,
    pub region: Option<String>,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateVehicleDto {
    pub name: Option<String>,
    pub model: Option<String>,
    pub license_plate: Option<String>,
    pub vehicle_type: Option<String>,
    pub max_capacity_kg: Option<f64>,
    pub odometer: Option<f64>,
    pub region: Option<String>,
}

/// Partial vehicle update. Omitted fields keep their stored value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateVehicleDto {
    pub name: Option<String>,
    pub model: Option<String>,
    pub license_plate: Option<String>,
    pub vehicle_type: Option<String>,
    pub max_capacity_kg: Option<f64>,
    pub odometer: Option<f64>,
    pub region: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VehicleFilterDto {
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub status: Option<String>,
    pub region: Option<String>,
}
