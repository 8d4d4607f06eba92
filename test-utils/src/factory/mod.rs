//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that need parent rows take their IDs explicitly;
//! `helpers` creates whole dependency chains in one call.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let vehicle = factory::vehicle::create_vehicle(&db).await?;
//!     let driver = factory::driver::create_driver(&db).await?;
//!
//!     // Create with all dependencies
//!     let (vehicle, driver, trip) = factory::helpers::create_trip_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let vehicle = factory::vehicle::VehicleFactory::new(&db)
//!     .max_capacity_kg(500.0)
//!     .status("in_shop")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user accounts
//! - `vehicle` - Create vehicles
//! - `driver` - Create drivers
//! - `trip` - Create trips for an existing vehicle and driver
//! - `maintenance_log`, `fuel_log`, `expense` - Create per-vehicle cost records
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod driver;
pub mod expense;
pub mod fuel_log;
pub mod helpers;
pub mod maintenance_log;
pub mod trip;
pub mod user;
pub mod vehicle;

pub use driver::create_driver;
pub use expense::create_expense;
pub use fuel_log::create_fuel_log;
pub use maintenance_log::create_maintenance_log;
pub use trip::create_trip;
pub use user::create_user;
pub use vehicle::create_vehicle;
