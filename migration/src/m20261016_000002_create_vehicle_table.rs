use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string(Vehicle::Name))
                    .col(string_null(Vehicle::Model))
                    .col(string_uniq(Vehicle::LicensePlate))
                    .col(string(Vehicle::VehicleType))
                    .col(double(Vehicle::MaxCapacityKg))
                    .col(double(Vehicle::Odometer).default(0.0))
                    .col(string_null(Vehicle::Region))
                    .col(string(Vehicle::Status).default("available"))
                    .col(
                        timestamp_with_time_zone(Vehicle::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Vehicle::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_status")
                    .table(Vehicle::Table)
                    .col(Vehicle::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    LicensePlate,
    VehicleType,
    MaxCapacityKg,
    Odometer,
    Region,
    Status,
    CreatedAt,
    UpdatedAt,
}
