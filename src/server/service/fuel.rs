use sea_orm::DatabaseConnection;

use crate::server::{
    data::fuel::FuelLogRepository,
    error::AppError,
    model::fuel::{CreateFuelLogParams, FuelLog},
    service::ensure_vehicle_and_trip,
};

pub struct FuelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FuelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a refuelling against a vehicle and, optionally, one of its trips.
    ///
    /// # Returns
    /// - `Ok(FuelLog)` - The new log with the vehicle's display fields
    /// - `Err(AppError::NotFound)` - Vehicle or referenced trip does not exist
    pub async fn create(&self, params: CreateFuelLogParams) -> Result<FuelLog, AppError> {
        let vehicle = ensure_vehicle_and_trip(self.db, params.vehicle_id, params.trip_id).await?;

        let mut log = FuelLogRepository::new(self.db).create(params).await?;
        log.vehicle_name = Some(vehicle.name);
        log.license_plate = Some(vehicle.license_plate);

        Ok(log)
    }

    pub async fn get_all(&self, vehicle_id: Option<i32>) -> Result<Vec<FuelLog>, AppError> {
        let repo = FuelLogRepository::new(self.db);

        Ok(repo.get_all(vehicle_id).await?)
    }
}
