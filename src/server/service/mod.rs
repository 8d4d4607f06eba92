//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing trip assignment guards and lifecycle rules
//! - **Orchestration**: Coordinating several repositories for one operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Committing multi-table writes atomically

pub mod analytics;
pub mod auth;
pub mod driver;
pub mod expense;
pub mod fuel;
pub mod maintenance;
pub mod trip;
pub mod user;
pub mod vehicle;


use sea_orm::DatabaseConnection;

use crate::server::{
    data::{trip::TripRepository, vehicle::VehicleRepository},
    error::AppError,
    model::vehicle::Vehicle,
};

/// Checks that a log's vehicle exists, and its trip when one is referenced.
///
/// # Returns
/// - `Ok(Vehicle)` - The referenced vehicle
/// - `Err(AppError::NotFound)` - Vehicle or trip does not exist
pub(crate) async fn ensure_vehicle_and_trip(
    db: &DatabaseConnection,
    vehicle_id: i32,
    trip_id: Option<i32>,
) -> Result<Vehicle, AppError> {
    let vehicle = VehicleRepository::new(db)
        .find_by_id(vehicle_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found.".to_string()))?;

    if let Some(trip_id) = trip_id {
        if TripRepository::new(db).find_by_id(trip_id).await?.is_none() {
            return Err(AppError::NotFound("Trip not found.".to_string()));
        }
    }

    Ok(vehicle)
}
