//! Trip workflow service.
//!
//! Enforces the assignment guards on create and edit, and applies lifecycle
//! transitions together with their vehicle and driver side effects. Every write
//! path runs in one database transaction, so a failure at any step leaves the
//! trip, vehicle and driver rows as they were.

use chrono::{NaiveDate, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{driver::DriverStatus, trip::TripStatus, vehicle::VehicleStatus},
    server::{
        data::{driver::DriverRepository, trip::TripRepository, vehicle::VehicleRepository},
        error::{trip::TripError, AppError},
        model::{
            driver::Driver,
            trip::{
                is_valid_transition, CreateTripParams, TripDetail, TripStatusChangeParams,
                TripStatusUpdate, UpdateTripParams,
            },
            vehicle::Vehicle,
        },
    },
};

const TRIP_NOT_FOUND: &str = "Trip not found.";

pub struct TripService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists trips newest first, optionally by status.
    pub async fn get_all(&self, status: Option<TripStatus>) -> Result<Vec<TripDetail>, AppError> {
        let repo = TripRepository::new(self.db);

        Ok(repo.get_all_details(status).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<TripDetail>, AppError> {
        let repo = TripRepository::new(self.db);

        Ok(repo.find_detail_by_id(id).await?)
    }

    /// Creates a draft trip after checking the vehicle and driver can take it.
    ///
    /// # Returns
    /// - `Ok(TripDetail)` - The new draft trip
    /// - `Err(AppError::NotFound)` - Vehicle or driver does not exist
    /// - `Err(TripError)` - Vehicle unavailable, over capacity, driver suspended or
    ///   license expired
    pub async fn create(&self, params: CreateTripParams) -> Result<TripDetail, AppError> {
        let txn = self.db.begin().await?;

        check_assignment(
            &txn,
            params.vehicle_id,
            params.driver_id,
            params.cargo_weight_kg,
            Utc::now().date_naive(),
        )
        .await?;

        let trip_repo = TripRepository::new(&txn);
        let trip = trip_repo.create(params).await?;
        let detail = trip_repo
            .find_detail_by_id(trip.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Trip missing after creation".to_string()))?;

        txn.commit().await?;

        tracing::info!("Created draft trip {}", trip.id);

        Ok(detail)
    }

    /// Edits a trip. Vehicle, driver and cargo may only change while the trip is a
    /// draft, and the assignment guards are re-checked against the result.
    ///
    /// # Returns
    /// - `Ok(Some(TripDetail))` - The updated trip
    /// - `Ok(None)` - No trip with that ID
    /// - `Err(AppError::NotFound)` - New vehicle or driver does not exist
    /// - `Err(TripError::AssignmentLocked)` - Assignment change on a non-draft trip
    /// - `Err(TripError)` - The resulting assignment fails a guard
    pub async fn update(
        &self,
        id: i32,
        params: UpdateTripParams,
    ) -> Result<Option<TripDetail>, AppError> {
        let txn = self.db.begin().await?;
        let trip_repo = TripRepository::new(&txn);

        let Some(trip) = trip_repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if params.changes_assignment() {
            if trip.status != TripStatus::Draft {
                return Err(TripError::AssignmentLocked(trip.status).into());
            }

            check_assignment(
                &txn,
                params.vehicle_id.unwrap_or(trip.vehicle_id),
                params.driver_id.unwrap_or(trip.driver_id),
                params.cargo_weight_kg.unwrap_or(trip.cargo_weight_kg),
                Utc::now().date_naive(),
            )
            .await?;
        }

        trip_repo.update(id, params).await?;
        let detail = trip_repo.find_detail_by_id(id).await?;

        txn.commit().await?;

        Ok(detail)
    }

    /// Moves a trip along its lifecycle and applies the side effects of the move.
    ///
    /// - dispatch: vehicle on trip, driver on duty, start odometer taken from the
    ///   vehicle when the trip has none
    /// - complete: vehicle available (odometer set to `end_odometer` if given),
    ///   driver off duty with one more completed trip, completion time recorded
    /// - cancel: vehicle available, driver off duty
    ///
    /// # Returns
    /// - `Ok(TripDetail)` - The trip after the transition
    /// - `Err(AppError::NotFound)` - No trip with that ID
    /// - `Err(TripError::InvalidTransition)` - Move not allowed from the current status
    /// - `Err(TripError::EndOdometerTooLow)` - `end_odometer` behind the start or
    ///   vehicle reading
    pub async fn change_status(
        &self,
        id: i32,
        change: TripStatusChangeParams,
    ) -> Result<TripDetail, AppError> {
        let txn = self.db.begin().await?;
        let trip_repo = TripRepository::new(&txn);
        let vehicle_repo = VehicleRepository::new(&txn);
        let driver_repo = DriverRepository::new(&txn);

        let trip = trip_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(TRIP_NOT_FOUND.to_string()))?;

        let invalid = TripError::InvalidTransition {
            from: trip.status,
            to: change.status,
        };
        if !is_valid_transition(trip.status, change.status) {
            return Err(invalid.into());
        }

        let update = match change.status {
            TripStatus::Dispatched => {
                let start_odometer = match trip.start_odometer {
                    Some(_) => None,
                    None => vehicle_repo
                        .find_by_id(trip.vehicle_id)
                        .await?
                        .map(|vehicle| vehicle.odometer),
                };

                vehicle_repo
                    .set_status(trip.vehicle_id, VehicleStatus::OnTrip, None)
                    .await?;
                driver_repo
                    .set_status(trip.driver_id, DriverStatus::OnDuty)
                    .await?;

                TripStatusUpdate {
                    status: TripStatus::Dispatched,
                    start_odometer,
                    end_odometer: None,
                    completed_at: None,
                }
            }
            TripStatus::Completed => {
                if let Some(end_odometer) = change.end_odometer {
                    let vehicle_odometer = vehicle_repo
                        .find_by_id(trip.vehicle_id)
                        .await?
                        .map_or(0.0, |vehicle| vehicle.odometer);
                    let minimum = trip.start_odometer.unwrap_or(0.0).max(vehicle_odometer);

                    if end_odometer < minimum {
                        return Err(TripError::EndOdometerTooLow {
                            end_odometer,
                            minimum,
                        }
                        .into());
                    }
                }

                vehicle_repo
                    .set_status(trip.vehicle_id, VehicleStatus::Available, change.end_odometer)
                    .await?;
                driver_repo.record_completed_trip(trip.driver_id).await?;

                TripStatusUpdate {
                    status: TripStatus::Completed,
                    start_odometer: None,
                    end_odometer: change.end_odometer,
                    completed_at: Some(Utc::now()),
                }
            }
            TripStatus::Cancelled => {
                vehicle_repo
                    .set_status(trip.vehicle_id, VehicleStatus::Available, None)
                    .await?;
                driver_repo
                    .set_status(trip.driver_id, DriverStatus::OffDuty)
                    .await?;

                TripStatusUpdate {
                    status: TripStatus::Cancelled,
                    start_odometer: None,
                    end_odometer: None,
                    completed_at: None,
                }
            }
            TripStatus::Draft => return Err(invalid.into()),
        };

        trip_repo.update_status(id, update).await?;
        let detail = trip_repo
            .find_detail_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(TRIP_NOT_FOUND.to_string()))?;

        txn.commit().await?;

        tracing::info!(
            "Trip {} moved from {} to {}",
            id,
            trip.status,
            change.status
        );

        Ok(detail)
    }
}

/// Loads the vehicle and driver of an assignment and runs the guards in order:
/// vehicle exists, vehicle status, capacity, driver exists, suspension, license.
async fn check_assignment<C: ConnectionTrait>(
    db: &C,
    vehicle_id: i32,
    driver_id: i32,
    cargo_weight_kg: f64,
    today: NaiveDate,
) -> Result<(), AppError> {
    let vehicle = VehicleRepository::new(db)
        .find_by_id(vehicle_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found.".to_string()))?;
    check_vehicle(&vehicle, cargo_weight_kg)?;

    let driver = DriverRepository::new(db)
        .find_by_id(driver_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Driver not found.".to_string()))?;
    check_driver(&driver, today)?;

    Ok(())
}

/// Vehicle must be available or already on a trip, and able to carry the cargo.
fn check_vehicle(vehicle: &Vehicle, cargo_weight_kg: f64) -> Result<(), TripError> {
    if !vehicle.status.is_assignable() {
        return Err(TripError::VehicleUnavailable(vehicle.status));
    }

    if cargo_weight_kg > vehicle.max_capacity_kg {
        return Err(TripError::CapacityExceeded {
            cargo_weight_kg,
            max_capacity_kg: vehicle.max_capacity_kg,
        });
    }

    Ok(())
}

fn check_driver(driver: &Driver, today: NaiveDate) -> Result<(), TripError> {
    if driver.status == DriverStatus::Suspended {
        return Err(TripError::DriverSuspended);
    }

    if driver.license_expired(today) {
        return Err(TripError::LicenseExpired);
    }

    Ok(())
}
