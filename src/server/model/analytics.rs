//! Analytics domain models.
//!
//! Aggregates are computed per vehicle; every vehicle appears in the reports even
//! when it has no logs, with zero totals.

use crate::model::analytics::{
    DashboardDto, FuelEfficiencyDto, OperationalCostDto, VehicleCostReportDto,
};

/// Fleet-wide counters for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashboardCounts {
    pub on_trip: u64,
    pub in_shop: u64,
    /// Vehicles whose status is anything but out of service.
    pub in_service: u64,
    pub draft_trips: u64,
}

impl DashboardCounts {
    /// Share of in-service vehicles that are on a trip or in the shop, as a rounded
    /// percentage. Zero when no vehicle is in service.
    pub fn utilization_rate(&self) -> u64 {
        if self.in_service == 0 {
            return 0;
        }

        (100.0 * (self.on_trip + self.in_shop) as f64 / self.in_service as f64).round() as u64
    }

    pub fn into_dto(self) -> DashboardDto {
        DashboardDto {
            active_fleet: self.on_trip,
            maintenance_alerts: self.in_shop,
            total_vehicles: self.in_service,
            utilization_rate: self.utilization_rate(),
            pending_cargo: self.draft_trips,
        }
    }
}

/// Cost and usage totals for one vehicle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleTotals {
    pub id: i32,
    pub name: String,
    pub license_plate: String,
    pub fuel_liters: f64,
    pub fuel_cost: f64,
    pub maintenance_cost: f64,
    pub expense_total: f64,
    /// Kilometres covered by completed trips with both odometer readings.
    pub distance_km: f64,
}

impl VehicleTotals {
    pub fn into_operational_cost_dto(self) -> OperationalCostDto {
        OperationalCostDto {
            id: self.id,
            name: self.name,
            license_plate: self.license_plate,
            fuel_cost: self.fuel_cost,
            maintenance_cost: self.maintenance_cost,
            total_operational_cost: self.fuel_cost + self.maintenance_cost,
        }
    }

    /// Fuel efficiency view. `km_per_liter` is only set when both distance and liters
    /// are non-zero.
    pub fn into_fuel_efficiency_dto(self) -> FuelEfficiencyDto {
        let km_per_liter = (self.distance_km > 0.0 && self.fuel_liters > 0.0)
            .then(|| self.distance_km / self.fuel_liters);

        FuelEfficiencyDto {
            id: self.id,
            name: self.name,
            license_plate: self.license_plate,
            total_liters: self.fuel_liters,
            total_fuel_cost: self.fuel_cost,
            distance_km: self.distance_km,
            km_per_liter,
        }
    }

    pub fn into_cost_report_dto(self) -> VehicleCostReportDto {
        VehicleCostReportDto {
            id: self.id,
            name: self.name,
            license_plate: self.license_plate,
            fuel_total: self.fuel_cost,
            maintenance_total: self.maintenance_cost,
            expense_total: self.expense_total,
        }
    }
}
