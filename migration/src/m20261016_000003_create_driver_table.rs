use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(pk_auto(Driver::Id))
                    .col(string(Driver::FullName))
                    .col(string_null(Driver::LicenseNumber))
                    .col(date_null(Driver::LicenseExpiry))
                    .col(string_null(Driver::LicenseCategory))
                    .col(string(Driver::Status).default("off_duty"))
                    .col(double(Driver::SafetyScore).default(100.0))
                    .col(integer(Driver::TripsCompleted).default(0))
                    .col(
                        timestamp_with_time_zone(Driver::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Driver::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    Table,
    Id,
    FullName,
    LicenseNumber,
    LicenseExpiry,
    LicenseCategory,
    Status,
    SafetyScore,
    TripsCompleted,
    CreatedAt,
    UpdatedAt,
}
