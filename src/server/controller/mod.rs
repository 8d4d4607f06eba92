//! HTTP request handlers.
//!
//! Controllers authenticate the request through `AuthGuard`, convert DTOs into
//! validated parameter types, call the matching service and convert the result back
//! into a DTO. Each handler is annotated with `utoipa::path` for the OpenAPI document.

pub mod analytics;
pub mod auth;
pub mod driver;
pub mod expense;
pub mod fuel;
pub mod health;
pub mod maintenance;
pub mod trip;
pub mod user;
pub mod vehicle;
