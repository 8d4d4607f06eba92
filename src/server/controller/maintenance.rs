use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, VehicleIdFilterDto},
        maintenance::{CreateMaintenanceLogDto, MaintenanceLogDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::maintenance::CreateMaintenanceLogParams,
        service::maintenance::MaintenanceService,
        state::AppState,
        util::extract::extract_json,
    },
};

/// Tag for grouping maintenance endpoints in OpenAPI documentation
pub static MAINTENANCE_TAG: &str = "maintenance";

/// List maintenance logs, newest service date first.
#[utoipa::path(
    get,
    path = "/api/maintenance",
    tag = MAINTENANCE_TAG,
    security(("bearer" = [])),
    params(VehicleIdFilterDto),
    responses(
        (status = 200, description = "Maintenance logs", body = Vec<MaintenanceLogDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenance_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<VehicleIdFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let logs = MaintenanceService::new(&state.db)
        .get_all(filter.vehicle_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(logs.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Log a service visit and move the vehicle into the shop.
///
/// # Access Control
/// - `LogMaintenance` - Managers and dispatchers
///
/// # Returns
/// - `201 Created` - The log entry
/// - `400 Bad Request` - Vehicle or description missing
/// - `404 Not Found` - No such vehicle
#[utoipa::path(
    post,
    path = "/api/maintenance",
    tag = MAINTENANCE_TAG,
    security(("bearer" = [])),
    request_body = CreateMaintenanceLogDto,
    responses(
        (status = 201, description = "Created log", body = MaintenanceLogDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_maintenance_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateMaintenanceLogDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::LogMaintenance])
        .await?;

    let params = CreateMaintenanceLogParams::from_dto(
        extract_json(payload)?,
        user.id,
        Utc::now().date_naive(),
    )?;
    let log = MaintenanceService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(log.into_dto())))
}
