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
        fuel::{CreateFuelLogDto, FuelLogDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::fuel::CreateFuelLogParams,
        service::fuel::FuelService,
        state::AppState,
        util::extract::extract_json,
    },
};

/// Tag for grouping fuel endpoints in OpenAPI documentation
pub static FUEL_TAG: &str = "fuel";

#[utoipa::path(
    get,
    path = "/api/fuel",
    tag = FUEL_TAG,
    security(("bearer" = [])),
    params(VehicleIdFilterDto),
    responses(
        (status = 200, description = "Fuel logs", body = Vec<FuelLogDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fuel_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<VehicleIdFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let logs = FuelService::new(&state.db).get_all(filter.vehicle_id).await?;

    Ok((
        StatusCode::OK,
        Json(logs.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Record a refuelling.
///
/// # Access Control
/// - `LogFuel` - Managers, dispatchers and financial analysts
#[utoipa::path(
    post,
    path = "/api/fuel",
    tag = FUEL_TAG,
    security(("bearer" = [])),
    request_body = CreateFuelLogDto,
    responses(
        (status = 201, description = "Created log", body = FuelLogDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Vehicle or trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fuel_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateFuelLogDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::LogFuel])
        .await?;

    let params = CreateFuelLogParams::from_dto(extract_json(payload)?, Utc::now().date_naive())?;
    let log = FuelService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(log.into_dto())))
}
