//! Fuel log domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::fuel::{CreateFuelLogDto, FuelLogDto},
    server::{error::AppError, util::parse::required},
};

/// Refuelling record, joined with its vehicle's display fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelLog {
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

impl FuelLog {
    pub fn from_entity(
        entity: entity::fuel_log::Model,
        vehicle: Option<&entity::vehicle::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            trip_id: entity.trip_id,
            liters: entity.liters,
            cost: entity.cost,
            fuel_date: entity.fuel_date,
            created_at: entity.created_at,
            vehicle_name: vehicle.map(|v| v.name.clone()),
            license_plate: vehicle.map(|v| v.license_plate.clone()),
        }
    }

    pub fn into_dto(self) -> FuelLogDto {
        FuelLogDto {
            id: self.id,
            vehicle_id: self.vehicle_id,
            trip_id: self.trip_id,
            liters: self.liters,
            cost: self.cost,
            fuel_date: self.fuel_date,
            created_at: self.created_at,
            vehicle_name: self.vehicle_name,
            license_plate: self.license_plate,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFuelLogParams {
    pub vehicle_id: i32,
    pub trip_id: Option<i32>,
    pub liters: f64,
    pub cost: f64,
    pub fuel_date: NaiveDate,
}

impl CreateFuelLogParams {
    /// Validates a fuel log request, defaulting the date to `today`.
    pub fn from_dto(dto: CreateFuelLogDto, today: NaiveDate) -> Result<Self, AppError> {
        const MISSING: &str = "vehicle_id, liters, cost required.";

        Ok(Self {
            vehicle_id: required(dto.vehicle_id, MISSING)?,
            trip_id: dto.trip_id,
            liters: required(dto.liters, MISSING)?,
            cost: required(dto.cost, MISSING)?,
            fuel_date: dto.fuel_date.unwrap_or(today),
        })
    }
}
