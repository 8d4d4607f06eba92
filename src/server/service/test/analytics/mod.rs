use crate::server::service::analytics::AnalyticsService;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod dashboard;
