use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::vehicle::VehicleStatus,
    server::{
        data::{maintenance::MaintenanceLogRepository, vehicle::VehicleRepository},
        error::AppError,
        model::maintenance::{CreateMaintenanceLogParams, MaintenanceLog},
    },
};

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a service visit and moves the vehicle into the shop.
    ///
    /// The log insert and the status change commit together.
    ///
    /// # Returns
    /// - `Ok(MaintenanceLog)` - The new log with the vehicle's display fields
    /// - `Err(AppError::NotFound)` - Vehicle does not exist
    pub async fn create(
        &self,
        params: CreateMaintenanceLogParams,
    ) -> Result<MaintenanceLog, AppError> {
        let txn = self.db.begin().await?;
        let vehicle_repo = VehicleRepository::new(&txn);

        let vehicle = vehicle_repo
            .find_by_id(params.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found.".to_string()))?;

        let mut log = MaintenanceLogRepository::new(&txn).create(params).await?;
        vehicle_repo
            .set_status(vehicle.id, VehicleStatus::InShop, None)
            .await?;

        txn.commit().await?;

        tracing::info!("Vehicle {} moved to the shop by maintenance log {}", vehicle.id, log.id);

        log.vehicle_name = Some(vehicle.name);
        log.license_plate = Some(vehicle.license_plate);

        Ok(log)
    }

    pub async fn get_all(&self, vehicle_id: Option<i32>) -> Result<Vec<MaintenanceLog>, AppError> {
        let repo = MaintenanceLogRepository::new(self.db);

        Ok(repo.get_all(vehicle_id).await?)
    }
}
