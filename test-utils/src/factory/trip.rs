//! Trip factory for creating test trips.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trips for an existing vehicle and driver.
///
/// The factory inserts rows directly and applies none of the trip workflow
/// guards or side effects, so it can set up states the workflow would refuse.
pub struct TripFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_id: i32,
    driver_id: i32,
    cargo_weight_kg: f64,
    origin: Option<String>,
    destination: Option<String>,
    status: String,
    start_odometer: Option<f64>,
    end_odometer: Option<f64>,
    completed_at: Option<DateTime<Utc>>,
}

impl<'a> TripFactory<'a> {
    /// Creates a new TripFactory with default values.
    ///
    /// Defaults:
    /// - cargo_weight_kg: `100.0`
    /// - origin: `"Depot"`, destination: `"Warehouse"`
    /// - status: `"draft"`, no odometer readings
    pub fn new(db: &'a DatabaseConnection, vehicle_id: i32, driver_id: i32) -> Self {
        Self {
            db,
            vehicle_id,
            driver_id,
            cargo_weight_kg: 100.0,
            origin: Some("Depot".to_string()),
            destination: Some("Warehouse".to_string()),
            status: "draft".to_string(),
            start_odometer: None,
            end_odometer: None,
            completed_at: None,
        }
    }

    pub fn cargo_weight_kg(mut self, cargo_weight_kg: f64) -> Self {
        self.cargo_weight_kg = cargo_weight_kg;
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets both odometer readings, as recorded for a finished trip.
    pub fn odometers(mut self, start: f64, end: f64) -> Self {
        self.start_odometer = Some(start);
        self.end_odometer = Some(end);
        self
    }

    pub fn completed_at(mut self, completed_at: DateTime<Utc>) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Builds and inserts the trip entity into the database.
    pub async fn build(self) -> Result<entity::trip::Model, DbErr> {
        entity::trip::ActiveModel {
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            driver_id: ActiveValue::Set(self.driver_id),
            cargo_weight_kg: ActiveValue::Set(self.cargo_weight_kg),
            origin: ActiveValue::Set(self.origin),
            destination: ActiveValue::Set(self.destination),
            status: ActiveValue::Set(self.status),
            start_odometer: ActiveValue::Set(self.start_odometer),
            end_odometer: ActiveValue::Set(self.end_odometer),
            created_by: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(self.completed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft trip with default values.
pub async fn create_trip(
    db: &DatabaseConnection,
    vehicle_id: i32,
    driver_id: i32,
) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db, vehicle_id, driver_id).build().await
}

/// Creates a trip in the given status.
pub async fn create_trip_with_status(
    db: &DatabaseConnection,
    vehicle_id: i32,
    driver_id: i32,
    status: &str,
) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db, vehicle_id, driver_id)
        .status(status)
        .build()
        .await
}
