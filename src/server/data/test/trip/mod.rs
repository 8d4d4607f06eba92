use crate::{
    model::trip::TripStatus,
    server::{
        data::trip::TripRepository,
        model::trip::{CreateTripParams, TripStatusUpdate, UpdateTripParams},
    },
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_vehicle;
mod create;
mod update;
