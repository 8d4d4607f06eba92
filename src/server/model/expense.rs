//! Expense domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::expense::{CreateExpenseDto, ExpenseDto},
    server::{error::AppError, util::parse::required},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i32,
    pub vehicle_id: i32,
    pub trip_id: Option<i32>,
    pub amount: f64,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub vehicle_name: Option<String>,
}

impl Expense {
    pub fn from_entity(
        entity: entity::expense::Model,
        vehicle: Option<&entity::vehicle::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            trip_id: entity.trip_id,
            amount: entity.amount,
            description: entity.description,
            expense_date: entity.expense_date,
            created_at: entity.created_at,
            vehicle_name: vehicle.map(|v| v.name.clone()),
        }
    }

    pub fn into_dto(self) -> ExpenseDto {
        ExpenseDto {
            id: self.id,
            vehicle_id: self.vehicle_id,
            trip_id: self.trip_id,
            amount: self.amount,
            description: self.description,
            expense_date: self.expense_date,
            created_at: self.created_at,
            vehicle_name: self.vehicle_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateExpenseParams {
    pub vehicle_id: i32,
    pub trip_id: Option<i32>,
    pub amount: f64,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
}

impl CreateExpenseParams {
    /// Validates an expense request, defaulting the date to `today`.
    pub fn from_dto(dto: CreateExpenseDto, today: NaiveDate) -> Result<Self, AppError> {
        const MISSING: &str = "vehicle_id and amount required.";

        Ok(Self {
            vehicle_id: required(dto.vehicle_id, MISSING)?,
            trip_id: dto.trip_id,
            amount: required(dto.amount, MISSING)?,
            description: dto.description,
            expense_date: dto.expense_date.unwrap_or(today),
        })
    }
}
