//! Analytics service for the dashboard and per-vehicle cost reports.

use sea_orm::DatabaseConnection;

use crate::{
    model::{trip::TripStatus, vehicle::VehicleStatus},
    server::{
        data::analytics::AnalyticsRepository,
        error::AppError,
        model::analytics::{DashboardCounts, VehicleTotals},
    },
};

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects the fleet counters shown on the dashboard.
    pub async fn dashboard(&self) -> Result<DashboardCounts, AppError> {
        let repo = AnalyticsRepository::new(self.db);

        Ok(DashboardCounts {
            on_trip: repo.count_vehicles_with_status(VehicleStatus::OnTrip).await?,
            in_shop: repo.count_vehicles_with_status(VehicleStatus::InShop).await?,
            in_service: repo.count_vehicles_in_service().await?,
            draft_trips: repo.count_trips_with_status(TripStatus::Draft).await?,
        })
    }

    /// Per-vehicle fuel, maintenance, expense and distance totals, ordered by vehicle ID.
    pub async fn vehicle_totals(&self) -> Result<Vec<VehicleTotals>, AppError> {
        let repo = AnalyticsRepository::new(self.db);

        Ok(repo.vehicle_totals().await?)
    }
}
