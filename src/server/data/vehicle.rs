//! Vehicle data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::vehicle::VehicleStatus,
    server::model::vehicle::{CreateVehicleParams, UpdateVehicleParams, Vehicle, VehicleFilter},
};

/// Repository providing database operations for vehicles.
pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new VehicleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new vehicle with status `available`.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The created vehicle
    /// - `Err(DbErr)` - Database error, including a unique violation on the plate
    pub async fn create(&self, params: CreateVehicleParams) -> Result<Vehicle, DbErr> {
        let now = Utc::now();

        let entity = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(params.name),
            model: ActiveValue::Set(params.model),
            license_plate: ActiveValue::Set(params.license_plate),
            vehicle_type: ActiveValue::Set(params.vehicle_type),
            max_capacity_kg: ActiveValue::Set(params.max_capacity_kg),
            odometer: ActiveValue::Set(params.odometer),
            region: ActiveValue::Set(params.region),
            status: ActiveValue::Set(VehicleStatus::Available.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Vehicle::from_entity(entity)
    }

    /// Finds a vehicle by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))` - Vehicle found
    /// - `Ok(None)` - No vehicle with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id)
            .one(self.db)
            .await?
            .map(Vehicle::from_entity)
            .transpose()
    }

    /// Lists vehicles matching every provided filter, ordered by ID.
    pub async fn get_all(&self, filter: VehicleFilter) -> Result<Vec<Vehicle>, DbErr> {
        let mut query = entity::prelude::Vehicle::find();

        if let Some(vehicle_type) = filter.vehicle_type {
            query = query.filter(entity::vehicle::Column::VehicleType.eq(vehicle_type));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::vehicle::Column::Status.eq(status.as_str()));
        }
        if let Some(region) = filter.region {
            query = query.filter(entity::vehicle::Column::Region.eq(region));
        }

        query
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Vehicle::from_entity)
            .collect()
    }

    /// Applies a partial update to a vehicle.
    ///
    /// # Returns
    /// - `Ok(Some(Vehicle))` - The updated vehicle
    /// - `Ok(None)` - No vehicle with that ID
    /// - `Err(DbErr)` - Database error, including a unique violation on the plate
    pub async fn update(
        &self,
        id: i32,
        params: UpdateVehicleParams,
    ) -> Result<Option<Vehicle>, DbErr> {
        let Some(entity) = entity::prelude::Vehicle::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::vehicle::ActiveModel = entity.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(model) = params.model {
            active.model = ActiveValue::Set(Some(model));
        }
        if let Some(license_plate) = params.license_plate {
            active.license_plate = ActiveValue::Set(license_plate);
        }
        if let Some(vehicle_type) = params.vehicle_type {
            active.vehicle_type = ActiveValue::Set(vehicle_type);
        }
        if let Some(max_capacity_kg) = params.max_capacity_kg {
            active.max_capacity_kg = ActiveValue::Set(max_capacity_kg);
        }
        if let Some(odometer) = params.odometer {
            active.odometer = ActiveValue::Set(odometer);
        }
        if let Some(region) = params.region {
            active.region = ActiveValue::Set(Some(region));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Vehicle::from_entity(entity).map(Some)
    }

    /// Sets a vehicle's status.
    ///
    /// # Arguments
    /// - `id` - Vehicle ID
    /// - `status` - New status
    /// - `odometer` - New odometer reading, or `None` to keep the current one
    ///
    /// # Returns
    /// - `Ok(())` - Status updated (or no matching vehicle found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(
        &self,
        id: i32,
        status: VehicleStatus,
        odometer: Option<f64>,
    ) -> Result<(), DbErr> {
        let mut update = entity::prelude::Vehicle::update_many()
            .col_expr(entity::vehicle::Column::Status, Expr::value(status.as_str()))
            .col_expr(entity::vehicle::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::vehicle::Column::Id.eq(id));

        if let Some(odometer) = odometer {
            update = update.col_expr(entity::vehicle::Column::Odometer, Expr::value(odometer));
        }

        update.exec(self.db).await?;

        Ok(())
    }

    /// Deletes a vehicle. Its maintenance, fuel and expense logs cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Vehicle deleted
    /// - `Ok(false)` - No vehicle with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Vehicle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
