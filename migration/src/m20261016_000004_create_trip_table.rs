use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261016_000002_create_vehicle_table::Vehicle, m20261016_000003_create_driver_table::Driver,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trip::Table)
                    .if_not_exists()
                    .col(pk_auto(Trip::Id))
                    .col(integer(Trip::VehicleId))
                    .col(integer(Trip::DriverId))
                    .col(double(Trip::CargoWeightKg))
                    .col(string_null(Trip::Origin))
                    .col(string_null(Trip::Destination))
                    .col(string(Trip::Status).default("draft"))
                    .col(double_null(Trip::StartOdometer))
                    .col(double_null(Trip::EndOdometer))
                    .col(integer_null(Trip::CreatedBy))
                    .col(
                        timestamp_with_time_zone(Trip::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Trip::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_vehicle_id")
                            .from(Trip::Table, Trip::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trip_driver_id")
                            .from(Trip::Table, Trip::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trip_status")
                    .table(Trip::Table)
                    .col(Trip::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trip {
    Table,
    Id,
    VehicleId,
    DriverId,
    CargoWeightKg,
    Origin,
    Destination,
    Status,
    StartOdometer,
    EndOdometer,
    CreatedBy,
    CreatedAt,
    CompletedAt,
}
