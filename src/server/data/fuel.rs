//! Fuel log data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::fuel::{CreateFuelLogParams, FuelLog};

/// Repository providing database operations for fuel logs.
pub struct FuelLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FuelLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateFuelLogParams) -> Result<FuelLog, DbErr> {
        let entity = entity::fuel_log::ActiveModel {
            vehicle_id: ActiveValue::Set(params.vehicle_id),
            trip_id: ActiveValue::Set(params.trip_id),
            liters: ActiveValue::Set(params.liters),
            cost: ActiveValue::Set(params.cost),
            fuel_date: ActiveValue::Set(params.fuel_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(FuelLog::from_entity(entity, None))
    }

    /// Lists fuel logs, newest first, with vehicle display fields.
    pub async fn get_all(&self, vehicle_id: Option<i32>) -> Result<Vec<FuelLog>, DbErr> {
        let mut query = entity::prelude::FuelLog::find();

        if let Some(vehicle_id) = vehicle_id {
            query = query.filter(entity::fuel_log::Column::VehicleId.eq(vehicle_id));
        }

        let rows = query
            .order_by_desc(entity::fuel_log::Column::FuelDate)
            .order_by_desc(entity::fuel_log::Column::Id)
            .find_also_related(entity::prelude::Vehicle)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(log, vehicle)| FuelLog::from_entity(log, vehicle.as_ref()))
            .collect())
    }
}
