use sea_orm::DatabaseConnection;

use crate::server::{
    data::{trip::TripRepository, vehicle::VehicleRepository},
    error::{is_unique_violation, AppError},
    model::vehicle::{CreateVehicleParams, UpdateVehicleParams, Vehicle, VehicleFilter},
};

const DUPLICATE_PLATE: &str = "License plate already exists.";

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new vehicle. A duplicate plate is a client error.
    pub async fn create(&self, params: CreateVehicleParams) -> Result<Vehicle, AppError> {
        let repo = VehicleRepository::new(self.db);

        repo.create(params).await.map_err(map_plate_violation)
    }

    pub async fn get_all(&self, filter: VehicleFilter) -> Result<Vec<Vehicle>, AppError> {
        let repo = VehicleRepository::new(self.db);

        Ok(repo.get_all(filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let repo = VehicleRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Applies a partial update, including manual status changes.
    /// Returns None if the vehicle doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateVehicleParams,
    ) -> Result<Option<Vehicle>, AppError> {
        let repo = VehicleRepository::new(self.db);

        repo.update(id, params).await.map_err(map_plate_violation)
    }

    /// Deletes a vehicle without trip history.
    /// Returns false if the vehicle doesn't exist
    ///
    /// # Returns
    /// - `Ok(true)` - Vehicle and its logs deleted
    /// - `Ok(false)` - No vehicle with that ID
    /// - `Err(AppError::Conflict)` - Trips still reference the vehicle
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = VehicleRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let trip_count = TripRepository::new(self.db).count_by_vehicle(id).await?;
        if trip_count > 0 {
            return Err(AppError::Conflict(
                "Vehicle has trips and cannot be deleted.".to_string(),
            ));
        }

        Ok(repo.delete(id).await?)
    }
}

fn map_plate_violation(err: sea_orm::DbErr) -> AppError {
    if is_unique_violation(&err) {
        AppError::BadRequest(DUPLICATE_PLATE.to_string())
    } else {
        err.into()
    }
}
