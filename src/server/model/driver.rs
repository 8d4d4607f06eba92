//! Driver domain models and parameters.
//!
//! A driver is eligible for a new trip unless suspended or holding a license whose
//! expiry date is before today. A license expiring today is still valid for the day.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::driver::{
        CreateDriverDto, DriverDto, DriverEligibilityDto, DriverFilterDto, DriverStatus,
        UpdateDriverDto,
    },
    server::{
        error::AppError,
        util::parse::{parse_column, parse_optional_client_value, required_text},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: i32,
    pub full_name: String,
    pub license_number: Option<String>,
    pub license_expiry: Option<NaiveDate>,
    pub license_category: Option<String>,
    pub status: DriverStatus,
    pub safety_score: f64,
    pub trips_completed: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Driver {
    pub fn into_dto(self) -> DriverDto {
        DriverDto {
            id: self.id,
            full_name: self.full_name,
            license_number: self.license_number,
            license_expiry: self.license_expiry,
            license_category: self.license_category,
            status: self.status,
            safety_score: self.safety_score,
            trips_completed: self.trips_completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a driver domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Driver)` - The converted driver
    /// - `Err(DbErr::Custom)` - The stored status is not a known driver status
    pub fn from_entity(entity: entity::driver::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            full_name: entity.full_name,
            license_number: entity.license_number,
            license_expiry: entity.license_expiry,
            license_category: entity.license_category,
            status: parse_column(&entity.status, "driver.status")?,
            safety_score: entity.safety_score,
            trips_completed: entity.trips_completed,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Whether the license expiry date lies before `today`. No expiry date never expires.
    pub fn license_expired(&self, today: NaiveDate) -> bool {
        self.license_expiry.is_some_and(|expiry| expiry < today)
    }

    /// Eligibility summary for the can-assign endpoint.
    pub fn eligibility(&self, today: NaiveDate) -> DriverEligibilityDto {
        let license_expired = self.license_expired(today);

        DriverEligibilityDto {
            can_assign: self.status != DriverStatus::Suspended && !license_expired,
            license_expired,
            status: self.status,
        }
    }
}

/// Parameters for registering a new driver. Status defaults to off duty.
#[derive(Debug, Clone)]
pub struct CreateDriverParams {
    pub full_name: String,
    pub license_number: Option<String>,
    pub license_expiry: Option<NaiveDate>,
    pub license_category: Option<String>,
    pub status: DriverStatus,
}

impl CreateDriverParams {
    pub fn from_dto(dto: CreateDriverDto) -> Result<Self, AppError> {
        Ok(Self {
            full_name: required_text(dto.full_name, "full_name required.")?,
            license_number: dto.license_number,
            license_expiry: dto.license_expiry,
            license_category: dto.license_category,
            status: parse_optional_client_value(dto.status.as_deref(), "driver status")?
                .unwrap_or(DriverStatus::OffDuty),
        })
    }
}

/// Partial driver update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateDriverParams {
    pub full_name: Option<String>,
    pub license_number: Option<String>,
    pub license_expiry: Option<NaiveDate>,
    pub license_category: Option<String>,
    pub status: Option<DriverStatus>,
    pub safety_score: Option<f64>,
}

impl UpdateDriverParams {
    pub fn from_dto(dto: UpdateDriverDto) -> Result<Self, AppError> {
        Ok(Self {
            full_name: dto.full_name,
            license_number: dto.license_number,
            license_expiry: dto.license_expiry,
            license_category: dto.license_category,
            status: parse_optional_client_value(dto.status.as_deref(), "driver status")?,
            safety_score: dto.safety_score,
        })
    }
}

/// Parses the optional `status` query filter for driver listings.
pub fn driver_status_filter(dto: DriverFilterDto) -> Result<Option<DriverStatus>, AppError> {
    parse_optional_client_value(
        dto.status.as_deref().filter(|v| !v.is_empty()),
        "driver status",
    )
}
