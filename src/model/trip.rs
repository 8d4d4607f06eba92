use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Draft,
    Dispatched,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub const ALL: [TripStatus; 4] = [
        TripStatus::Draft,
        TripStatus::Dispatched,
        TripStatus::Completed,
        TripStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Draft => "draft",
            TripStatus::Dispatched => "dispatched",
            TripStatus::Completed => "completed",
            TripStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TripStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Trip with the names of its assigned vehicle and driver.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TripDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub driver_id: i32,
    pub cargo_weight_kg: f64,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub status: TripStatus,
    pub start_odometer: Option<f64>,
    pub end_odometer: Option<f64>,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub vehicle_name: Option<String>,
    pub license_plate: Option<String>,
    pub max_capacity_kg: Option<f64>,
    pub driver_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateTripDto {
    pub vehicle_id: Option<i32>,
    pub driver_id: Option<i32>,
    pub cargo_weight_kg: Option<f64>,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateTripStatusDto {
    pub status: Option<String>,
    /// Final odometer reading, applied when completing a trip.
    pub end_odometer: Option<f64>,
}

/// Partial trip edit. Omitted fields keep their stored value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateTripDto {
    pub vehicle_id: Option<i32>,
    pub driver_id: Option<i32>,
    pub cargo_weight_kg: Option<f64>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub start_odometer: Option<f64>,
    pub end_odometer: Option<f64>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TripFilterDto {
    pub status: Option<String>,
}
