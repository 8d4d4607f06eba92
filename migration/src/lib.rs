pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_user_table;
mod m20261016_000002_create_vehicle_table;
mod m20261016_000003_create_driver_table;
mod m20261016_000004_create_trip_table;
mod m20261016_000005_create_maintenance_log_table;
mod m20261016_000006_create_fuel_log_table;
mod m20261016_000007_create_expense_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_user_table::Migration),
            Box::new(m20261016_000002_create_vehicle_table::Migration),
            Box::new(m20261016_000003_create_driver_table::Migration),
            Box::new(m20261016_000004_create_trip_table::Migration),
            Box::new(m20261016_000005_create_maintenance_log_table::Migration),
            Box::new(m20261016_000006_create_fuel_log_table::Migration),
            Box::new(m20261016_000007_create_expense_table::Migration),
        ]
    }
}
