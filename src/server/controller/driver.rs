use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        driver::{CreateDriverDto, DriverDto, DriverEligibilityDto, DriverFilterDto, UpdateDriverDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::driver::{driver_status_filter, CreateDriverParams, UpdateDriverParams},
        service::driver::DriverService,
        state::AppState,
        util::extract::extract_json,
    },
};

/// Tag for grouping driver endpoints in OpenAPI documentation
pub static DRIVER_TAG: &str = "driver";

const DRIVER_NOT_FOUND: &str = "Driver not found.";

#[utoipa::path(
    get,
    path = "/api/drivers",
    tag = DRIVER_TAG,
    security(("bearer" = [])),
    params(DriverFilterDto),
    responses(
        (status = 200, description = "Matching drivers", body = Vec<DriverDto>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drivers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<DriverFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let status = driver_status_filter(filter)?;
    let drivers = DriverService::new(&state.db).get_all(status).await?;

    Ok((
        StatusCode::OK,
        Json(drivers.into_iter().map(|d| d.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/drivers/{id}",
    tag = DRIVER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Driver ID")),
    responses(
        (status = 200, description = "The driver", body = DriverDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_driver(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(driver) = DriverService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound(DRIVER_NOT_FOUND.to_string()));
    };

    Ok((StatusCode::OK, Json(driver.into_dto())))
}

/// Add a driver profile. Status defaults to off duty.
///
/// # Access Control
/// - `ManageDrivers` - Managers, dispatchers and safety officers
#[utoipa::path(
    post,
    path = "/api/drivers",
    tag = DRIVER_TAG,
    security(("bearer" = [])),
    request_body = CreateDriverDto,
    responses(
        (status = 201, description = "Created driver", body = DriverDto),
        (status = 400, description = "Name missing or unknown status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_driver(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateDriverDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageDrivers])
        .await?;

    let params = CreateDriverParams::from_dto(extract_json(payload)?)?;
    let driver = DriverService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(driver.into_dto())))
}

/// Partially update a driver, such as suspending them or renewing a license.
///
/// # Access Control
/// - `ManageDrivers` - Managers, dispatchers and safety officers
#[utoipa::path(
    put,
    path = "/api/drivers/{id}",
    tag = DRIVER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Driver ID")),
    request_body = UpdateDriverDto,
    responses(
        (status = 200, description = "Updated driver", body = DriverDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_driver(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateDriverDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageDrivers])
        .await?;

    let params = UpdateDriverParams::from_dto(extract_json(payload)?)?;
    let Some(driver) = DriverService::new(&state.db).update(id, params).await? else {
        return Err(AppError::NotFound(DRIVER_NOT_FOUND.to_string()));
    };

    Ok((StatusCode::OK, Json(driver.into_dto())))
}

/// Report whether a driver may currently be assigned to a trip.
#[utoipa::path(
    get,
    path = "/api/drivers/{id}/can-assign",
    tag = DRIVER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Driver ID")),
    responses(
        (status = 200, description = "Assignment eligibility", body = DriverEligibilityDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Driver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn can_assign_driver(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(driver) = DriverService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound(DRIVER_NOT_FOUND.to_string()));
    };

    Ok((
        StatusCode::OK,
        Json(driver.eligibility(Utc::now().date_naive())),
    ))
}
