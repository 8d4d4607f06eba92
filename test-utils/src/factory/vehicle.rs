//! Vehicle factory for creating test vehicles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let truck = VehicleFactory::new(&db)
///     .vehicle_type("truck")
///     .max_capacity_kg(5000.0)
///     .build()
///     .await?;
/// ```
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    model: Option<String>,
    license_plate: String,
    vehicle_type: String,
    max_capacity_kg: f64,
    odometer: f64,
    region: Option<String>,
    status: String,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vehicle {id}"`, license_plate: `"TEST-{id}"`
    /// - vehicle_type: `"van"`, max_capacity_kg: `1000.0`, odometer: `0.0`
    /// - status: `"available"`, no model or region
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Vehicle {}", id),
            model: None,
            license_plate: format!("TEST-{}", id),
            vehicle_type: "van".to_string(),
            max_capacity_kg: 1000.0,
            odometer: 0.0,
            region: None,
            status: "available".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn license_plate(mut self, license_plate: impl Into<String>) -> Self {
        self.license_plate = license_plate.into();
        self
    }

    pub fn vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = vehicle_type.into();
        self
    }

    pub fn max_capacity_kg(mut self, max_capacity_kg: f64) -> Self {
        self.max_capacity_kg = max_capacity_kg;
        self
    }

    pub fn odometer(mut self, odometer: f64) -> Self {
        self.odometer = odometer;
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now();
        entity::vehicle::ActiveModel {
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set(self.model),
            license_plate: ActiveValue::Set(self.license_plate),
            vehicle_type: ActiveValue::Set(self.vehicle_type),
            max_capacity_kg: ActiveValue::Set(self.max_capacity_kg),
            odometer: ActiveValue::Set(self.odometer),
            region: ActiveValue::Set(self.region),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available vehicle with default values.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}

/// Creates a vehicle with the given status.
pub async fn create_vehicle_with_status(
    db: &DatabaseConnection,
    status: &str,
) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).status(status).build().await
}
