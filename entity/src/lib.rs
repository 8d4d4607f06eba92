//! SeaORM entity definitions for the FleetFlow schema.
//!
//! Each module mirrors one table created by the `migration` crate. Status and
//! role columns are stored as plain strings; the server parses them into typed
//! enums at the repository boundary.

pub mod prelude;

pub mod driver;
pub mod expense;
pub mod fuel_log;
pub mod maintenance_log;
pub mod trip;
pub mod user;
pub mod vehicle;
