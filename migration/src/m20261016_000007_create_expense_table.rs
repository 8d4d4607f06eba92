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
                    .table(Expense::Table)
                    .if_not_exists()
                    .col(pk_auto(Expense::Id))
                    .col(integer(Expense::VehicleId))
                    .col(integer_null(Expense::TripId))
                    .col(double(Expense::Amount))
                    .col(text_null(Expense::Description))
                    .col(date(Expense::ExpenseDate))
                    .col(
                        timestamp_with_time_zone(Expense::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expense_vehicle_id")
                            .from(Expense::Table, Expense::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expense_trip_id")
                            .from(Expense::Table, Expense::TripId)
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
            .drop_table(Table::drop().table(Expense::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Expense {
    Table,
    Id,
    VehicleId,
    TripId,
    Amount,
    Description,
    ExpenseDate,
    CreatedAt,
}
