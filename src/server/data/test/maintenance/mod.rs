use crate::server::{
    data::maintenance::MaintenanceLogRepository, model::maintenance::CreateMaintenanceLogParams,
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
