use crate::server::{data::fuel::FuelLogRepository, model::fuel::CreateFuelLogParams};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
