//! Driver data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::driver::DriverStatus,
    server::model::driver::{CreateDriverParams, Driver, UpdateDriverParams},
};

/// Repository providing database operations for drivers.
pub struct DriverRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DriverRepository<'a, C> {
    /// Creates a new DriverRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new driver with a full safety score and no completed trips.
    pub async fn create(&self, params: CreateDriverParams) -> Result<Driver, DbErr> {
        let now = Utc::now();

        let entity = entity::driver::ActiveModel {
            full_name: ActiveValue::Set(params.full_name),
            license_number: ActiveValue::Set(params.license_number),
            license_expiry: ActiveValue::Set(params.license_expiry),
            license_category: ActiveValue::Set(params.license_category),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            safety_score: ActiveValue::Set(100.0),
            trips_completed: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Driver::from_entity(entity)
    }

    /// Finds a driver by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Driver))` - Driver found
    /// - `Ok(None)` - No driver with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Driver>, DbErr> {
        entity::prelude::Driver::find_by_id(id)
            .one(self.db)
            .await?
            .map(Driver::from_entity)
            .transpose()
    }

    /// Lists drivers, optionally by status, ordered by ID.
    pub async fn get_all(&self, status: Option<DriverStatus>) -> Result<Vec<Driver>, DbErr> {
        let mut query = entity::prelude::Driver::find();

        if let Some(status) = status {
            query = query.filter(entity::driver::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_asc(entity::driver::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Driver::from_entity)
            .collect()
    }

    /// Applies a partial update to a driver.
    ///
    /// # Returns
    /// - `Ok(Some(Driver))` - The updated driver
    /// - `Ok(None)` - No driver with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateDriverParams) -> Result<Option<Driver>, DbErr> {
        let Some(entity) = entity::prelude::Driver::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::driver::ActiveModel = entity.into();

        if let Some(full_name) = params.full_name {
            active.full_name = ActiveValue::Set(full_name);
        }
        if let Some(license_number) = params.license_number {
            active.license_number = ActiveValue::Set(Some(license_number));
        }
        if let Some(license_expiry) = params.license_expiry {
            active.license_expiry = ActiveValue::Set(Some(license_expiry));
        }
        if let Some(license_category) = params.license_category {
            active.license_category = ActiveValue::Set(Some(license_category));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(safety_score) = params.safety_score {
            active.safety_score = ActiveValue::Set(safety_score);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Driver::from_entity(entity).map(Some)
    }

    /// Sets a driver's duty status.
    ///
    /// # Returns
    /// - `Ok(())` - Status updated (or no matching driver found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(&self, id: i32, status: DriverStatus) -> Result<(), DbErr> {
        entity::prelude::Driver::update_many()
            .col_expr(entity::driver::Column::Status, Expr::value(status.as_str()))
            .col_expr(entity::driver::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::driver::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Takes a driver off duty and counts one more completed trip.
    ///
    /// Reads then writes the counter, so callers run it inside the transaction that
    /// completes the trip.
    ///
    /// # Returns
    /// - `Ok(Driver)` - The updated driver
    /// - `Err(DbErr::RecordNotFound)` - No driver with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn record_completed_trip(&self, id: i32) -> Result<Driver, DbErr> {
        let Some(entity) = entity::prelude::Driver::find_by_id(id).one(self.db).await? else {
            return Err(DbErr::RecordNotFound(format!("Driver {} not found", id)));
        };

        let trips_completed = entity.trips_completed + 1;
        let mut active: entity::driver::ActiveModel = entity.into();
        active.status = ActiveValue::Set(DriverStatus::OffDuty.as_str().to_string());
        active.trips_completed = ActiveValue::Set(trips_completed);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Driver::from_entity(entity)
    }
}
