//! Maintenance log data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::maintenance::{CreateMaintenanceLogParams, MaintenanceLog};

/// Repository providing database operations for maintenance logs.
pub struct MaintenanceLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MaintenanceLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a maintenance log.
    ///
    /// Does not touch the vehicle; moving it into the shop is the service's job.
    pub async fn create(&self, params: CreateMaintenanceLogParams) -> Result<MaintenanceLog, DbErr> {
        let entity = entity::maintenance_log::ActiveModel {
            vehicle_id: ActiveValue::Set(params.vehicle_id),
            description: ActiveValue::Set(params.description),
            cost: ActiveValue::Set(params.cost),
            service_date: ActiveValue::Set(params.service_date),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(MaintenanceLog::from_entity(entity, None))
    }

    /// Lists maintenance logs, newest service date first, with vehicle display fields.
    ///
    /// # Arguments
    /// - `vehicle_id` - Restrict to one vehicle, or `None` for all
    pub async fn get_all(&self, vehicle_id: Option<i32>) -> Result<Vec<MaintenanceLog>, DbErr> {
        let mut query = entity::prelude::MaintenanceLog::find();

        if let Some(vehicle_id) = vehicle_id {
            query = query.filter(entity::maintenance_log::Column::VehicleId.eq(vehicle_id));
        }

        let rows = query
            .order_by_desc(entity::maintenance_log::Column::ServiceDate)
            .order_by_desc(entity::maintenance_log::Column::Id)
            .find_also_related(entity::prelude::Vehicle)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(log, vehicle)| MaintenanceLog::from_entity(log, vehicle.as_ref()))
            .collect())
    }
}
