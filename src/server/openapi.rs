//! OpenAPI document assembled from the `utoipa::path` annotations on every handler.
//!
//! Served at `/api/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        analytics::{DashboardDto, FuelEfficiencyDto, OperationalCostDto, VehicleCostReportDto},
        api::{ErrorDto, HealthDto, MessageDto},
        auth::{LoginDto, LoginResponseDto},
        driver::{CreateDriverDto, DriverDto, DriverEligibilityDto, DriverStatus, UpdateDriverDto},
        expense::{CreateExpenseDto, ExpenseDto},
        fuel::{CreateFuelLogDto, FuelLogDto},
        maintenance::{CreateMaintenanceLogDto, MaintenanceLogDto},
        trip::{CreateTripDto, TripDto, TripStatus, UpdateTripDto, UpdateTripStatusDto},
        user::{CreateUserDto, CreatedUserDto, RegisterUserDto, RegisteredUserDto, Role, UserDto},
        vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto, VehicleStatus},
    },
    server::{controller, state::AppState},
};

/// Registers the bearer token scheme referenced by `security(("bearer" = []))`.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Token returned by POST /api/auth/login."))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FleetFlow API",
        description = "Fleet and logistics management: vehicles, drivers, trips, maintenance, fuel, expenses and cost analytics."
    ),
    paths(
        controller::health::health,
        controller::auth::login,
        controller::auth::get_user,
        controller::user::register,
        controller::user::create_user,
        controller::user::get_users,
        controller::vehicle::get_vehicles,
        controller::vehicle::get_vehicle,
        controller::vehicle::create_vehicle,
        controller::vehicle::update_vehicle,
        controller::vehicle::delete_vehicle,
        controller::driver::get_drivers,
        controller::driver::get_driver,
        controller::driver::create_driver,
        controller::driver::update_driver,
        controller::driver::can_assign_driver,
        controller::trip::get_trips,
        controller::trip::get_trip,
        controller::trip::create_trip,
        controller::trip::update_trip,
        controller::trip::update_trip_status,
        controller::maintenance::get_maintenance_logs,
        controller::maintenance::create_maintenance_log,
        controller::fuel::get_fuel_logs,
        controller::fuel::create_fuel_log,
        controller::expense::get_expenses,
        controller::expense::create_expense,
        controller::analytics::get_dashboard,
        controller::analytics::get_operational_cost,
        controller::analytics::get_fuel_efficiency,
        controller::analytics::get_reports,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        HealthDto,
        LoginDto,
        LoginResponseDto,
        Role,
        UserDto,
        RegisterUserDto,
        RegisteredUserDto,
        CreateUserDto,
        CreatedUserDto,
        VehicleStatus,
        VehicleDto,
        CreateVehicleDto,
        UpdateVehicleDto,
        DriverStatus,
        DriverDto,
        CreateDriverDto,
        UpdateDriverDto,
        DriverEligibilityDto,
        TripStatus,
        TripDto,
        CreateTripDto,
        UpdateTripDto,
        UpdateTripStatusDto,
        MaintenanceLogDto,
        CreateMaintenanceLogDto,
        FuelLogDto,
        CreateFuelLogDto,
        ExpenseDto,
        CreateExpenseDto,
        DashboardDto,
        OperationalCostDto,
        FuelEfficiencyDto,
        VehicleCostReportDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Login and token inspection"),
        (name = "user", description = "Account management"),
        (name = "vehicle", description = "Vehicle registry"),
        (name = "driver", description = "Driver profiles"),
        (name = "trip", description = "Trip assignment and lifecycle"),
        (name = "maintenance", description = "Service logs"),
        (name = "fuel", description = "Fuel logs"),
        (name = "expense", description = "Vehicle expenses"),
        (name = "analytics", description = "Dashboard and cost reports"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
