use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, trip::TripStatus, vehicle::VehicleStatus};

/// Trip assignment and lifecycle rule violations.
#[derive(Error, Debug, PartialEq)]
pub enum TripError {
    /// Vehicle is in the shop or out of service.
    #[error("Vehicle is not available for assignment (status: {0}).")]
    VehicleUnavailable(VehicleStatus),

    /// Cargo is heavier than the vehicle can carry.
    #[error("Cargo weight ({cargo_weight_kg} kg) exceeds vehicle max capacity ({max_capacity_kg} kg).")]
    CapacityExceeded {
        cargo_weight_kg: f64,
        max_capacity_kg: f64,
    },

    #[error("Driver is suspended.")]
    DriverSuspended,

    /// Driver's license expiry date is before today.
    #[error("Driver license has expired.")]
    LicenseExpired,

    /// Requested status change is not an edge of the trip lifecycle.
    #[error("Cannot change trip status from {from} to {to}.")]
    InvalidTransition { from: TripStatus, to: TripStatus },

    /// Vehicle, driver or cargo edit on a trip that has left draft.
    #[error("Vehicle, driver and cargo can only be changed on draft trips (status: {0}).")]
    AssignmentLocked(TripStatus),

    /// Final odometer reading is behind the reading at dispatch or on the vehicle.
    #[error("End odometer ({end_odometer}) cannot be lower than {minimum}.")]
    EndOdometerTooLow { end_odometer: f64, minimum: f64 },
}

/// Converts trip rule violations into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For assignment guard failures and odometer readings
/// - 409 Conflict - For transitions outside the trip lifecycle and edits to
///   non-draft assignments
impl IntoResponse for TripError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidTransition { .. } | Self::AssignmentLocked(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
