use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261016_000002_create_vehicle_table::Vehicle, m20261016_000004_create_trip_table::Trip,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FuelLog::Table)
                    .if_not_exists()
                    .col(pk_auto(FuelLog::Id))
                    .col(integer(FuelLog::VehicleId))
                    .col(integer_null(FuelLog::TripId))
                    .col(double(FuelLog::Liters))
                    .col(double(FuelLog::Cost))
                    .col(date(FuelLog::FuelDate))
                    .col(
                        timestamp_with_time_zone(FuelLog::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fuel_log_vehicle_id")
                            .from(FuelLog::Table, FuelLog::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fuel_log_trip_id")
                            .from(FuelLog::Table, FuelLog::TripId)
                            .to(Trip::Table, Trip::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FuelLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FuelLog {
    Table,
    Id,
    VehicleId,
    TripId,
    Liters,
    Cost,
    FuelDate,
    CreatedAt,
}
