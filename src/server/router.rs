use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    controller::{
        analytics::{get_dashboard, get_fuel_efficiency, get_operational_cost, get_reports},
        auth::{get_user, login},
        driver::{can_assign_driver, create_driver, get_driver, get_drivers, update_driver},
        expense::{create_expense, get_expenses},
        fuel::{create_fuel_log, get_fuel_logs},
        health::health,
        maintenance::{create_maintenance_log, get_maintenance_logs},
        trip::{create_trip, get_trip, get_trips, update_trip, update_trip_status},
        user::{create_user, get_users, register},
        vehicle::{create_vehicle, delete_vehicle, get_vehicle, get_vehicles, update_vehicle},
    },
    openapi,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/auth/login", post(login))
        .route("/api/auth/user", get(get_user))
        .route("/api/users", get(get_users).post(create_user))
        .route("/api/users/register", post(register))
        .route("/api/vehicles", get(get_vehicles).post(create_vehicle))
        .route(
            "/api/vehicles/{id}",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/api/drivers", get(get_drivers).post(create_driver))
        .route("/api/drivers/{id}", get(get_driver).put(update_driver))
        .route("/api/drivers/{id}/can-assign", get(can_assign_driver))
        .route("/api/trips", get(get_trips).post(create_trip))
        .route("/api/trips/{id}", get(get_trip).put(update_trip))
        .route("/api/trips/{id}/status", patch(update_trip_status))
        .route(
            "/api/maintenance",
            get(get_maintenance_logs).post(create_maintenance_log),
        )
        .route("/api/fuel", get(get_fuel_logs).post(create_fuel_log))
        .route("/api/expenses", get(get_expenses).post(create_expense))
        .route("/api/analytics/dashboard", get(get_dashboard))
        .route("/api/analytics/operational-cost", get(get_operational_cost))
        .route("/api/analytics/fuel-efficiency", get(get_fuel_efficiency))
        .route("/api/analytics/reports", get(get_reports))
        .merge(openapi::router())
}

/// Full application with request tracing and permissive CORS for the web client.
pub fn app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
