//! API data transfer objects.
//!
//! Request and response shapes serialized at the HTTP boundary, plus the status and
//! role enums that appear in them. Server-side domain models convert into these at
//! the controller boundary.

pub mod analytics;
pub mod api;
pub mod auth;
pub mod driver;
pub mod expense;
pub mod fuel;
pub mod maintenance;
pub mod trip;
pub mod user;
pub mod vehicle;
