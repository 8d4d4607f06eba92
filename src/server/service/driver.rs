use sea_orm::DatabaseConnection;

use crate::{
    model::driver::DriverStatus,
    server::{
        data::driver::DriverRepository,
        error::AppError,
        model::driver::{CreateDriverParams, Driver, UpdateDriverParams},
    },
};

pub struct DriverService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateDriverParams) -> Result<Driver, AppError> {
        let repo = DriverRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    pub async fn get_all(&self, status: Option<DriverStatus>) -> Result<Vec<Driver>, AppError> {
        let repo = DriverRepository::new(self.db);

        Ok(repo.get_all(status).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Driver>, AppError> {
        let repo = DriverRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Applies a partial update, such as a suspension or a renewed license.
    /// Returns None if the driver doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateDriverParams,
    ) -> Result<Option<Driver>, AppError> {
        let repo = DriverRepository::new(self.db);

        Ok(repo.update(id, params).await?)
    }
}
