//! Driver factory for creating test drivers.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drivers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let expired = DriverFactory::new(&db)
///     .license_expiry(Utc::now().date_naive() - Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct DriverFactory<'a> {
    db: &'a DatabaseConnection,
    full_name: String,
    license_number: Option<String>,
    license_expiry: Option<NaiveDate>,
    license_category: Option<String>,
    status: String,
    safety_score: f64,
    trips_completed: i32,
}

impl<'a> DriverFactory<'a> {
    /// Creates a new DriverFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"Driver {id}"`, license_number: `"LIC-{id}"`
    /// - no license expiry or category
    /// - status: `"off_duty"`, safety_score: `100.0`, trips_completed: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            full_name: format!("Driver {}", id),
            license_number: Some(format!("LIC-{}", id)),
            license_expiry: None,
            license_category: None,
            status: "off_duty".to_string(),
            safety_score: 100.0,
            trips_completed: 0,
        }
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn license_expiry(mut self, license_expiry: NaiveDate) -> Self {
        self.license_expiry = Some(license_expiry);
        self
    }

    pub fn license_category(mut self, license_category: impl Into<String>) -> Self {
        self.license_category = Some(license_category.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn safety_score(mut self, safety_score: f64) -> Self {
        self.safety_score = safety_score;
        self
    }

    pub fn trips_completed(mut self, trips_completed: i32) -> Self {
        self.trips_completed = trips_completed;
        self
    }

    /// Builds and inserts the driver entity into the database.
    pub async fn build(self) -> Result<entity::driver::Model, DbErr> {
        let now = Utc::now();
        entity::driver::ActiveModel {
            full_name: ActiveValue::Set(self.full_name),
            license_number: ActiveValue::Set(self.license_number),
            license_expiry: ActiveValue::Set(self.license_expiry),
            license_category: ActiveValue::Set(self.license_category),
            status: ActiveValue::Set(self.status),
            safety_score: ActiveValue::Set(self.safety_score),
            trips_completed: ActiveValue::Set(self.trips_completed),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an off-duty driver with default values.
pub async fn create_driver(db: &DatabaseConnection) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db).build().await
}

/// Creates a driver with the given status.
pub async fn create_driver_with_status(
    db: &DatabaseConnection,
    status: &str,
) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db).status(status).build().await
}
