//! Trip data repository for database operations.
//!
//! Trip listings are joined with vehicle and driver display fields. The vehicle is
//! loaded through the trip's relation and drivers are fetched in one batch keyed by ID.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::trip::TripStatus,
    server::model::trip::{CreateTripParams, Trip, TripDetail, TripStatusUpdate, UpdateTripParams},
};

/// Repository providing database operations for trips.
pub struct TripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    /// Creates a new TripRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a trip in `draft` status.
    ///
    /// Assignment guards are the service's responsibility; this only writes the row.
    pub async fn create(&self, params: CreateTripParams) -> Result<Trip, DbErr> {
        let entity = entity::trip::ActiveModel {
            vehicle_id: ActiveValue::Set(params.vehicle_id),
            driver_id: ActiveValue::Set(params.driver_id),
            cargo_weight_kg: ActiveValue::Set(params.cargo_weight_kg),
            origin: ActiveValue::Set(params.origin),
            destination: ActiveValue::Set(params.destination),
            status: ActiveValue::Set(TripStatus::Draft.as_str().to_string()),
            start_odometer: ActiveValue::Set(None),
            end_odometer: ActiveValue::Set(None),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Trip::from_entity(entity)
    }

    /// Finds a trip by ID without its joined display fields.
    ///
    /// # Returns
    /// - `Ok(Some(Trip))` - Trip found
    /// - `Ok(None)` - No trip with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Trip>, DbErr> {
        entity::prelude::Trip::find_by_id(id)
            .one(self.db)
            .await?
            .map(Trip::from_entity)
            .transpose()
    }

    /// Finds a trip by ID with vehicle and driver display fields.
    ///
    /// # Returns
    /// - `Ok(Some(TripDetail))` - Trip found
    /// - `Ok(None)` - No trip with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_detail_by_id(&self, id: i32) -> Result<Option<TripDetail>, DbErr> {
        let Some((trip, vehicle)) = entity::prelude::Trip::find_by_id(id)
            .find_also_related(entity::prelude::Vehicle)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let driver = entity::prelude::Driver::find_by_id(trip.driver_id)
            .one(self.db)
            .await?;

        TripDetail::from_entities(trip, vehicle.as_ref(), driver.as_ref()).map(Some)
    }

    /// Lists trips newest first, optionally by status, with display fields.
    pub async fn get_all_details(
        &self,
        status: Option<TripStatus>,
    ) -> Result<Vec<TripDetail>, DbErr> {
        let mut query = entity::prelude::Trip::find();

        if let Some(status) = status {
            query = query.filter(entity::trip::Column::Status.eq(status.as_str()));
        }

        let rows = query
            .order_by_desc(entity::trip::Column::Id)
            .find_also_related(entity::prelude::Vehicle)
            .all(self.db)
            .await?;

        let driver_ids: Vec<i32> = rows.iter().map(|(trip, _)| trip.driver_id).collect();
        let drivers: HashMap<i32, entity::driver::Model> = entity::prelude::Driver::find()
            .filter(entity::driver::Column::Id.is_in(driver_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|driver| (driver.id, driver))
            .collect();

        rows.into_iter()
            .map(|(trip, vehicle)| {
                let driver = drivers.get(&trip.driver_id);
                TripDetail::from_entities(trip, vehicle.as_ref(), driver)
            })
            .collect()
    }

    /// Writes the row changes of a lifecycle transition.
    ///
    /// # Returns
    /// - `Ok(Trip)` - The updated trip
    /// - `Err(DbErr)` - Database error, including a missing trip
    pub async fn update_status(&self, id: i32, update: TripStatusUpdate) -> Result<Trip, DbErr> {
        let mut active = entity::trip::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(update.status.as_str().to_string()),
            ..Default::default()
        };

        if let Some(start_odometer) = update.start_odometer {
            active.start_odometer = ActiveValue::Set(Some(start_odometer));
        }
        if let Some(end_odometer) = update.end_odometer {
            active.end_odometer = ActiveValue::Set(Some(end_odometer));
        }
        if let Some(completed_at) = update.completed_at {
            active.completed_at = ActiveValue::Set(Some(completed_at));
        }

        let entity = active.update(self.db).await?;

        Trip::from_entity(entity)
    }

    /// Applies a partial edit to a trip.
    ///
    /// # Returns
    /// - `Ok(Some(Trip))` - The updated trip
    /// - `Ok(None)` - No trip with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateTripParams) -> Result<Option<Trip>, DbErr> {
        let Some(entity) = entity::prelude::Trip::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::trip::ActiveModel = entity.into();

        if let Some(vehicle_id) = params.vehicle_id {
            active.vehicle_id = ActiveValue::Set(vehicle_id);
        }
        if let Some(driver_id) = params.driver_id {
            active.driver_id = ActiveValue::Set(driver_id);
        }
        if let Some(cargo_weight_kg) = params.cargo_weight_kg {
            active.cargo_weight_kg = ActiveValue::Set(cargo_weight_kg);
        }
        if let Some(origin) = params.origin {
            active.origin = ActiveValue::Set(Some(origin));
        }
        if let Some(destination) = params.destination {
            active.destination = ActiveValue::Set(Some(destination));
        }
        if let Some(start_odometer) = params.start_odometer {
            active.start_odometer = ActiveValue::Set(Some(start_odometer));
        }
        if let Some(end_odometer) = params.end_odometer {
            active.end_odometer = ActiveValue::Set(Some(end_odometer));
        }

        let entity = active.update(self.db).await?;

        Trip::from_entity(entity).map(Some)
    }

    /// Counts trips referencing a vehicle, in any status.
    pub async fn count_by_vehicle(&self, vehicle_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Trip::find()
            .filter(entity::trip::Column::VehicleId.eq(vehicle_id))
            .count(self.db)
            .await
    }
}
