//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so the same methods run against the
//! connection pool or inside a `DatabaseTransaction` when a service needs several writes
//! to commit together.

pub mod analytics;
pub mod driver;
pub mod expense;
pub mod fuel;
pub mod maintenance;
pub mod trip;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
