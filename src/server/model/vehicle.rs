//! Vehicle domain models and parameters.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto, VehicleFilterDto, VehicleStatus},
    server::{
        error::AppError,
        util::parse::{parse_column, parse_optional_client_value, required, required_text},
    },
};

/// Fleet vehicle with its capacity, odometer and availability status.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
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

impl Vehicle {
    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            name: self.name,
            model: self.model,
            license_plate: self.license_plate,
            vehicle_type: self.vehicle_type,
            max_capacity_kg: self.max_capacity_kg,
            odometer: self.odometer,
            region: self.region,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a vehicle domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The converted vehicle
    /// - `Err(DbErr::Custom)` - The stored status is not a known vehicle status
    pub fn from_entity(entity: entity::vehicle::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            model: entity.model,
            license_plate: entity.license_plate,
            vehicle_type: entity.vehicle_type,
            max_capacity_kg: entity.max_capacity_kg,
            odometer: entity.odometer,
            region: entity.region,
            status: parse_column(&entity.status, "vehicle.status")?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for registering a new vehicle. New vehicles start out available.
#[derive(Debug, Clone)]
pub struct CreateVehicleParams {
    pub name: String,
    pub model: Option<String>,
    pub license_plate: String,
    pub vehicle_type: String,
    pub max_capacity_kg: f64,
    pub odometer: f64,
    pub region: Option<String>,
}

impl CreateVehicleParams {
    /// Validates a create-vehicle request.
    ///
    /// # Returns
    /// - `Ok(CreateVehicleParams)` - Required fields present, odometer defaulted to 0
    /// - `Err(AppError::BadRequest)` - Name, plate, type or capacity missing
    pub fn from_dto(dto: CreateVehicleDto) -> Result<Self, AppError> {
        const MISSING: &str = "name, license_plate, vehicle_type, max_capacity_kg required.";

        Ok(Self {
            name: required_text(dto.name, MISSING)?,
            model: dto.model,
            license_plate: required_text(dto.license_plate, MISSING)?,
            vehicle_type: required_text(dto.vehicle_type, MISSING)?,
            max_capacity_kg: required(dto.max_capacity_kg, MISSING)?,
            odometer: dto.odometer.unwrap_or(0.0),
            region: dto.region,
        })
    }
}

/// Partial vehicle update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateVehicleParams {
    pub name: Option<String>,
    pub model: Option<String>,
    pub license_plate: Option<String>,
    pub vehicle_type: Option<String>,
    pub max_capacity_kg: Option<f64>,
    pub odometer: Option<f64>,
    pub region: Option<String>,
    pub status: Option<VehicleStatus>,
}

impl UpdateVehicleParams {
    /// Validates a vehicle update, rejecting unknown statuses.
    pub fn from_dto(dto: UpdateVehicleDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name,
            model: dto.model,
            license_plate: dto.license_plate,
            vehicle_type: dto.vehicle_type,
            max_capacity_kg: dto.max_capacity_kg,
            odometer: dto.odometer,
            region: dto.region,
            status: parse_optional_client_value(dto.status.as_deref(), "vehicle status")?,
        })
    }
}

/// Optional filters for listing vehicles; all given filters must match.
#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    pub vehicle_type: Option<String>,
    pub status: Option<VehicleStatus>,
    pub region: Option<String>,
}

impl VehicleFilter {
    pub fn from_dto(dto: VehicleFilterDto) -> Result<Self, AppError> {
        Ok(Self {
            vehicle_type: dto.vehicle_type.filter(|v| !v.is_empty()),
            status: parse_optional_client_value(
                dto.status.as_deref().filter(|v| !v.is_empty()),
                "vehicle status",
            )?,
            region: dto.region.filter(|v| !v.is_empty()),
        })
    }
}
