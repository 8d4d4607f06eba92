//! Trip domain models, parameters and the lifecycle transition table.
//!
//! Trips move `draft → dispatched → completed`, and either of the first two states
//! may be cancelled. Completed and cancelled trips are terminal.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::trip::{CreateTripDto, TripDto, TripFilterDto, TripStatus, UpdateTripDto, UpdateTripStatusDto},
    server::{
        error::AppError,
        util::parse::{parse_client_value, parse_column, parse_optional_client_value, required},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
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
}

impl Trip {
    /// Converts an entity model to a trip domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Trip)` - The converted trip
    /// - `Err(DbErr::Custom)` - The stored status is not a known trip status
    pub fn from_entity(entity: entity::trip::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            driver_id: entity.driver_id,
            cargo_weight_kg: entity.cargo_weight_kg,
            origin: entity.origin,
            destination: entity.destination,
            status: parse_column(&entity.status, "trip.status")?,
            start_odometer: entity.start_odometer,
            end_odometer: entity.end_odometer,
            created_by: entity.created_by,
            created_at: entity.created_at,
            completed_at: entity.completed_at,
        })
    }
}

/// Trip joined with display fields of its vehicle and driver.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDetail {
    pub trip: Trip,
    pub vehicle_name: Option<String>,
    pub license_plate: Option<String>,
    pub max_capacity_kg: Option<f64>,
    pub driver_name: Option<String>,
}

impl TripDetail {
    /// Builds a detail view from a trip entity and its optionally loaded relations.
    pub fn from_entities(
        trip: entity::trip::Model,
        vehicle: Option<&entity::vehicle::Model>,
        driver: Option<&entity::driver::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            trip: Trip::from_entity(trip)?,
            vehicle_name: vehicle.map(|v| v.name.clone()),
            license_plate: vehicle.map(|v| v.license_plate.clone()),
            max_capacity_kg: vehicle.map(|v| v.max_capacity_kg),
            driver_name: driver.map(|d| d.full_name.clone()),
        })
    }

    pub fn into_dto(self) -> TripDto {
        let trip = self.trip;

        TripDto {
            id: trip.id,
            vehicle_id: trip.vehicle_id,
            driver_id: trip.driver_id,
            cargo_weight_kg: trip.cargo_weight_kg,
            origin: trip.origin,
            destination: trip.destination,
            status: trip.status,
            start_odometer: trip.start_odometer,
            end_odometer: trip.end_odometer,
            created_by: trip.created_by,
            created_at: trip.created_at,
            completed_at: trip.completed_at,
            vehicle_name: self.vehicle_name,
            license_plate: self.license_plate,
            max_capacity_kg: self.max_capacity_kg,
            driver_name: self.driver_name,
        }
    }
}

/// Whether the lifecycle allows moving a trip from `from` to `to`.
pub fn is_valid_transition(from: TripStatus, to: TripStatus) -> bool {
    matches!(
        (from, to),
        (TripStatus::Draft, TripStatus::Dispatched)
            | (TripStatus::Dispatched, TripStatus::Completed)
            | (TripStatus::Draft, TripStatus::Cancelled)
            | (TripStatus::Dispatched, TripStatus::Cancelled)
    )
}

/// Parameters for creating a draft trip.
#[derive(Debug, Clone)]
pub struct CreateTripParams {
    pub vehicle_id: i32,
    pub driver_id: i32,
    pub cargo_weight_kg: f64,
    pub origin: Option<String>,
    pub destination: Option<String>,
    /// Account that created the trip.
    pub created_by: Option<i32>,
}

impl CreateTripParams {
    /// Validates a create-trip request.
    ///
    /// # Returns
    /// - `Ok(CreateTripParams)` - Vehicle, driver and cargo weight present
    /// - `Err(AppError::BadRequest)` - Any of them missing
    pub fn from_dto(dto: CreateTripDto, created_by: i32) -> Result<Self, AppError> {
        const MISSING: &str = "vehicle_id, driver_id, cargo_weight_kg required.";

        Ok(Self {
            vehicle_id: required(dto.vehicle_id, MISSING)?,
            driver_id: required(dto.driver_id, MISSING)?,
            cargo_weight_kg: required(dto.cargo_weight_kg, MISSING)?,
            origin: dto.origin,
            destination: dto.destination,
            created_by: Some(created_by),
        })
    }
}

/// Requested lifecycle transition.
#[derive(Debug, Clone, Copy)]
pub struct TripStatusChangeParams {
    pub status: TripStatus,
    /// Final odometer reading, only used when completing.
    pub end_odometer: Option<f64>,
}

impl TripStatusChangeParams {
    /// Validates a status change request.
    ///
    /// # Returns
    /// - `Ok(TripStatusChangeParams)` - Known target status
    /// - `Err(AppError::BadRequest)` - Status missing or unknown
    pub fn from_dto(dto: UpdateTripStatusDto) -> Result<Self, AppError> {
        let status = required(dto.status.filter(|s| !s.is_empty()), "status required.")?;

        Ok(Self {
            status: parse_client_value(&status, "trip status")?,
            end_odometer: dto.end_odometer,
        })
    }
}

/// Row changes written by a lifecycle transition.
///
/// Odometer fields left `None` keep their stored value.
#[derive(Debug, Clone, Copy)]
pub struct TripStatusUpdate {
    pub status: TripStatus,
    pub start_odometer: Option<f64>,
    pub end_odometer: Option<f64>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Partial trip edit; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTripParams {
    pub vehicle_id: Option<i32>,
    pub driver_id: Option<i32>,
    pub cargo_weight_kg: Option<f64>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub start_odometer: Option<f64>,
    pub end_odometer: Option<f64>,
}

impl UpdateTripParams {
    pub fn from_dto(dto: UpdateTripDto) -> Self {
        Self {
            vehicle_id: dto.vehicle_id,
            driver_id: dto.driver_id,
            cargo_weight_kg: dto.cargo_weight_kg,
            origin: dto.origin,
            destination: dto.destination,
            start_odometer: dto.start_odometer,
            end_odometer: dto.end_odometer,
        }
    }

    /// Whether the edit changes the vehicle, driver or cargo assignment.
    pub fn changes_assignment(&self) -> bool {
        self.vehicle_id.is_some() || self.driver_id.is_some() || self.cargo_weight_kg.is_some()
    }
}

/// Parses the optional `status` query filter for trip listings.
pub fn trip_status_filter(dto: TripFilterDto) -> Result<Option<TripStatus>, AppError> {
    parse_optional_client_value(
        dto.status.as_deref().filter(|v| !v.is_empty()),
        "trip status",
    )
}
