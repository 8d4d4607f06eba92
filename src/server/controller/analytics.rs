use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        analytics::{DashboardDto, FuelEfficiencyDto, OperationalCostDto, VehicleCostReportDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::analytics::AnalyticsService,
        state::AppState,
    },
};

/// Tag for grouping analytics endpoints in OpenAPI documentation
pub static ANALYTICS_TAG: &str = "analytics";

/// Fleet counters for the dashboard. Open to every authenticated user.
#[utoipa::path(
    get,
    path = "/api/analytics/dashboard",
    tag = ANALYTICS_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let counts = AnalyticsService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(counts.into_dto())))
}

/// Fuel plus maintenance cost per vehicle.
///
/// # Access Control
/// - `ViewCosts` - Managers and financial analysts
#[utoipa::path(
    get,
    path = "/api/analytics/operational-cost",
    tag = ANALYTICS_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Operational cost per vehicle", body = Vec<OperationalCostDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_operational_cost(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ViewCosts])
        .await?;

    let totals = AnalyticsService::new(&state.db).vehicle_totals().await?;

    Ok((
        StatusCode::OK,
        Json(
            totals
                .into_iter()
                .map(|t| t.into_operational_cost_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Fuel consumption and distance per vehicle.
///
/// # Access Control
/// - `ViewCosts` - Managers and financial analysts
#[utoipa::path(
    get,
    path = "/api/analytics/fuel-efficiency",
    tag = ANALYTICS_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Fuel efficiency per vehicle", body = Vec<FuelEfficiencyDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fuel_efficiency(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ViewCosts])
        .await?;

    let totals = AnalyticsService::new(&state.db).vehicle_totals().await?;

    Ok((
        StatusCode::OK,
        Json(
            totals
                .into_iter()
                .map(|t| t.into_fuel_efficiency_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Fuel, maintenance and expense totals per vehicle.
///
/// # Access Control
/// - `ViewCosts` - Managers and financial analysts
#[utoipa::path(
    get,
    path = "/api/analytics/reports",
    tag = ANALYTICS_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Cost report per vehicle", body = Vec<VehicleCostReportDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reports(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ViewCosts])
        .await?;

    let totals = AnalyticsService::new(&state.db).vehicle_totals().await?;

    Ok((
        StatusCode::OK,
        Json(
            totals
                .into_iter()
                .map(|t| t.into_cost_report_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
