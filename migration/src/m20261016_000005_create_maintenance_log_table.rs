use sea_orm_migration::{prelude::*, schema::*};

use super::m20261016_000002_create_vehicle_table::Vehicle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceLog::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceLog::Id))
                    .col(integer(MaintenanceLog::VehicleId))
                    .col(text(MaintenanceLog::Description))
                    .col(double(MaintenanceLog::Cost).default(0.0))
                    .col(date(MaintenanceLog::ServiceDate))
                    .col(integer_null(MaintenanceLog::CreatedBy))
                    .col(
                        timestamp_with_time_zone(MaintenanceLog::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_maintenance_log_vehicle_id")
                            .from(MaintenanceLog::Table, MaintenanceLog::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaintenanceLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceLog {
    Table,
    Id,
    VehicleId,
    Description,
    Cost,
    ServiceDate,
    CreatedBy,
    CreatedAt,
}
