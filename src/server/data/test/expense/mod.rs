use crate::server::{data::expense::ExpenseRepository, model::expense::CreateExpenseParams};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
