use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ExpenseDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub trip_id: Option<i32>,
    pub amount: f64,
    pub description: Option<String>,
    pub expense_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub vehicle_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateExpenseDto {
    pub vehicle_id: Option<i32>,
    pub trip_id: Option<i32>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub expense_date: Option<NaiveDate>,
}
