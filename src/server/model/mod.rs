//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types validate request DTOs so services only ever see complete input.

pub mod analytics;
pub mod driver;
pub mod expense;
pub mod fuel;
pub mod maintenance;
pub mod trip;
pub mod user;
pub mod vehicle;
