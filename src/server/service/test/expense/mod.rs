use crate::server::{
    error::AppError, model::expense::CreateExpenseParams, service::expense::ExpenseService,
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
