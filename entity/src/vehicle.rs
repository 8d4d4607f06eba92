use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    #[sea_orm(unique)]
    pub license_plate: String,
    pub vehicle_type: String,
    pub max_capacity_kg: f64,
    pub odometer: f64,
    pub region: Option<String>,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trip::Entity")]
    Trip,
    #[sea_orm(has_many = "super::maintenance_log::Entity")]
    MaintenanceLog,
    #[sea_orm(has_many = "super::fuel_log::Entity")]
    FuelLog,
    #[sea_orm(has_many = "super::expense::Entity")]
    Expense,
}

impl Related<super::trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trip.def()
    }
}

impl Related<super::maintenance_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceLog.def()
    }
}

impl Related<super::fuel_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FuelLog.def()
    }
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expense.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
