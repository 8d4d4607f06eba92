//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values (emails, plates) in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a draft trip together with the vehicle and driver it references.
///
/// All entities are created with default values: an available vehicle with
/// 1000 kg capacity, an off-duty driver with no license expiry, and a 100 kg
/// draft trip. Use the individual factories to customize any of them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((vehicle, driver, trip))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::vehicle::Model,
        entity::driver::Model,
        entity::trip::Model,
    ),
    DbErr,
> {
    let vehicle = crate::factory::vehicle::create_vehicle(db).await?;
    let driver = crate::factory::driver::create_driver(db).await?;
    let trip = crate::factory::trip::create_trip(db, vehicle.id, driver.id).await?;

    Ok((vehicle, driver, trip))
}
