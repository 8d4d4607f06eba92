use sea_orm::DatabaseConnection;

use crate::server::{
    data::expense::ExpenseRepository,
    error::AppError,
    model::expense::{CreateExpenseParams, Expense},
    service::ensure_vehicle_and_trip,
};

pub struct ExpenseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpenseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an expense against a vehicle and, optionally, one of its trips.
    ///
    /// # Returns
    /// - `Ok(Expense)` - The new expense with the vehicle name
    /// - `Err(AppError::NotFound)` - Vehicle or referenced trip does not exist
    pub async fn create(&self, params: CreateExpenseParams) -> Result<Expense, AppError> {
        let vehicle = ensure_vehicle_and_trip(self.db, params.vehicle_id, params.trip_id).await?;

        let mut expense = ExpenseRepository::new(self.db).create(params).await?;
        expense.vehicle_name = Some(vehicle.name);

        Ok(expense)
    }

    pub async fn get_all(&self, vehicle_id: Option<i32>) -> Result<Vec<Expense>, AppError> {
        let repo = ExpenseRepository::new(self.db);

        Ok(repo.get_all(vehicle_id).await?)
    }
}
