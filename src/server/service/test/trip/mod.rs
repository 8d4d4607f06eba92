use crate::{
    model::{trip::TripStatus, vehicle::VehicleStatus},
    server::{
        error::{trip::TripError, AppError},
        model::trip::{CreateTripParams, TripStatusChangeParams, UpdateTripParams},
        service::trip::TripService,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod change_status;
mod update;

fn create_params(vehicle_id: i32, driver_id: i32, cargo_weight_kg: f64) -> CreateTripParams {
    CreateTripParams {
        vehicle_id,
        driver_id,
        cargo_weight_kg,
        origin: Some("Depot".to_string()),
        destination: Some("Market".to_string()),
        created_by: None,
    }
}

fn change(status: TripStatus, end_odometer: Option<f64>) -> TripStatusChangeParams {
    TripStatusChangeParams {
        status,
        end_odometer,
    }
}

async fn vehicle_row(db: &DatabaseConnection, id: i32) -> Result<entity::vehicle::Model, DbErr> {
    Ok(entity::prelude::Vehicle::find_by_id(id).one(db).await?.unwrap())
}

async fn driver_row(db: &DatabaseConnection, id: i32) -> Result<entity::driver::Model, DbErr> {
    Ok(entity::prelude::Driver::find_by_id(id).one(db).await?.unwrap())
}

async fn trip_row(db: &DatabaseConnection, id: i32) -> Result<entity::trip::Model, DbErr> {
    Ok(entity::prelude::Trip::find_by_id(id).one(db).await?.unwrap())
}
