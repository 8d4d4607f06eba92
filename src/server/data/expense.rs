//! Expense data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::expense::{CreateExpenseParams, Expense};

/// Repository providing database operations for expenses.
pub struct ExpenseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExpenseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateExpenseParams) -> Result<Expense, DbErr> {
        let entity = entity::expense::ActiveModel {
            vehicle_id: ActiveValue::Set(params.vehicle_id),
            trip_id: ActiveValue::Set(params.trip_id),
            amount: ActiveValue::Set(params.amount),
            description: ActiveValue::Set(params.description),
            expense_date: ActiveValue::Set(params.expense_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Expense::from_entity(entity, None))
    }

    /// Lists expenses, newest first, with the vehicle name.
    pub async fn get_all(&self, vehicle_id: Option<i32>) -> Result<Vec<Expense>, DbErr> {
        let mut query = entity::prelude::Expense::find();

        if let Some(vehicle_id) = vehicle_id {
            query = query.filter(entity::expense::Column::VehicleId.eq(vehicle_id));
        }

        let rows = query
            .order_by_desc(entity::expense::Column::ExpenseDate)
            .order_by_desc(entity::expense::Column::Id)
            .find_also_related(entity::prelude::Vehicle)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(expense, vehicle)| Expense::from_entity(expense, vehicle.as_ref()))
            .collect())
    }
}
