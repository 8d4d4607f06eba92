//! Analytics data repository for fleet-wide counts and per-vehicle totals.
//!
//! Per-vehicle totals are folded in Rust from narrow column projections so every
//! vehicle appears in the result, including those without any logs.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    model::{trip::TripStatus, vehicle::VehicleStatus},
    server::model::analytics::VehicleTotals,
};

pub struct AnalyticsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnalyticsRepository<'a, C> {
    /// Creates a new AnalyticsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn count_vehicles_with_status(&self, status: VehicleStatus) -> Result<u64, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }

    /// Counts vehicles whose status is anything but out of service.
    pub async fn count_vehicles_in_service(&self) -> Result<u64, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Status.ne(VehicleStatus::OutOfService.as_str()))
            .count(self.db)
            .await
    }

    pub async fn count_trips_with_status(&self, status: TripStatus) -> Result<u64, DbErr> {
        entity::prelude::Trip::find()
            .filter(entity::trip::Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }

    /// Computes fuel, maintenance, expense and distance totals for every vehicle.
    ///
    /// Distance only counts completed trips with both odometer readings.
    ///
    /// # Returns
    /// - `Ok(Vec<VehicleTotals>)` - One entry per vehicle, ordered by vehicle ID
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn vehicle_totals(&self) -> Result<Vec<VehicleTotals>, DbErr> {
        let vehicles: Vec<(i32, String, String)> = entity::prelude::Vehicle::find()
            .select_only()
            .column(entity::vehicle::Column::Id)
            .column(entity::vehicle::Column::Name)
            .column(entity::vehicle::Column::LicensePlate)
            .order_by_asc(entity::vehicle::Column::Id)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut totals: HashMap<i32, VehicleTotals> = vehicles
            .iter()
            .map(|(id, name, license_plate)| {
                let totals = VehicleTotals {
                    id: *id,
                    name: name.clone(),
                    license_plate: license_plate.clone(),
                    ..Default::default()
                };
                (*id, totals)
            })
            .collect();

        let fuel: Vec<(i32, f64, f64)> = entity::prelude::FuelLog::find()
            .select_only()
            .column(entity::fuel_log::Column::VehicleId)
            .column(entity::fuel_log::Column::Liters)
            .column(entity::fuel_log::Column::Cost)
            .into_tuple()
            .all(self.db)
            .await?;

        for (vehicle_id, liters, cost) in fuel {
            if let Some(entry) = totals.get_mut(&vehicle_id) {
                entry.fuel_liters += liters;
                entry.fuel_cost += cost;
            }
        }

        let maintenance: Vec<(i32, f64)> = entity::prelude::MaintenanceLog::find()
            .select_only()
            .column(entity::maintenance_log::Column::VehicleId)
            .column(entity::maintenance_log::Column::Cost)
            .into_tuple()
            .all(self.db)
            .await?;

        for (vehicle_id, cost) in maintenance {
            if let Some(entry) = totals.get_mut(&vehicle_id) {
                entry.maintenance_cost += cost;
            }
        }

        let expenses: Vec<(i32, f64)> = entity::prelude::Expense::find()
            .select_only()
            .column(entity::expense::Column::VehicleId)
            .column(entity::expense::Column::Amount)
            .into_tuple()
            .all(self.db)
            .await?;

        for (vehicle_id, amount) in expenses {
            if let Some(entry) = totals.get_mut(&vehicle_id) {
                entry.expense_total += amount;
            }
        }

        let trips: Vec<(i32, Option<f64>, Option<f64>)> = entity::prelude::Trip::find()
            .select_only()
            .column(entity::trip::Column::VehicleId)
            .column(entity::trip::Column::StartOdometer)
            .column(entity::trip::Column::EndOdometer)
            .filter(entity::trip::Column::Status.eq(TripStatus::Completed.as_str()))
            .filter(entity::trip::Column::StartOdometer.is_not_null())
            .filter(entity::trip::Column::EndOdometer.is_not_null())
            .into_tuple()
            .all(self.db)
            .await?;

        for (vehicle_id, start, end) in trips {
            if let (Some(entry), Some(start), Some(end)) = (totals.get_mut(&vehicle_id), start, end)
            {
                entry.distance_km += end - start;
            }
        }

        Ok(vehicles
            .into_iter()
            .filter_map(|(id, _, _)| totals.remove(&id))
            .collect())
    }
}
