//! Maintenance log domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::maintenance::{CreateMaintenanceLogDto, MaintenanceLogDto},
    server::{
        error::AppError,
        util::parse::{required, required_text},
    },
};

/// Service record, joined with its vehicle's display fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceLog {
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

impl MaintenanceLog {
    pub fn from_entity(
        entity: entity::maintenance_log::Model,
        vehicle: Option<&entity::vehicle::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            description: entity.description,
            cost: entity.cost,
            service_date: entity.service_date,
            created_by: entity.created_by,
            created_at: entity.created_at,
            vehicle_name: vehicle.map(|v| v.name.clone()),
            license_plate: vehicle.map(|v| v.license_plate.clone()),
        }
    }

    pub fn into_dto(self) -> MaintenanceLogDto {
        MaintenanceLogDto {
            id: self.id,
            vehicle_id: self.vehicle_id,
            description: self.description,
            cost: self.cost,
            service_date: self.service_date,
            created_by: self.created_by,
            created_at: self.created_at,
            vehicle_name: self.vehicle_name,
            license_plate: self.license_plate,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMaintenanceLogParams {
    pub vehicle_id: i32,
    pub description: String,
    pub cost: f64,
    pub service_date: NaiveDate,
    pub created_by: Option<i32>,
}

impl CreateMaintenanceLogParams {
    /// Validates a maintenance log request, defaulting cost to 0 and date to `today`.
    pub fn from_dto(
        dto: CreateMaintenanceLogDto,
        created_by: i32,
        today: NaiveDate,
    ) -> Result<Self, AppError> {
        const MISSING: &str = "vehicle_id and description required.";

        Ok(Self {
            vehicle_id: required(dto.vehicle_id, MISSING)?,
            description: required_text(dto.description, MISSING)?,
            cost: dto.cost.unwrap_or(0.0),
            service_date: dto.service_date.unwrap_or(today),
            created_by: Some(created_by),
        })
    }
}
