use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto, VehicleFilterDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::vehicle::{CreateVehicleParams, UpdateVehicleParams, VehicleFilter},
        service::vehicle::VehicleService,
        state::AppState,
        util::extract::extract_json,
    },
};

/// Tag for grouping vehicle endpoints in OpenAPI documentation
pub static VEHICLE_TAG: &str = "vehicle";

const VEHICLE_NOT_FOUND: &str = "Vehicle not found.";

/// List vehicles ordered by ID, optionally filtered by type, status and region.
///
/// # Returns
/// - `200 OK` - Matching vehicles
/// - `400 Bad Request` - Unknown status filter
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    security(("bearer" = [])),
    params(VehicleFilterDto),
    responses(
        (status = 200, description = "Matching vehicles", body = Vec<VehicleDto>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<VehicleFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let filter = VehicleFilter::from_dto(filter)?;
    let vehicles = VehicleService::new(&state.db).get_all(filter).await?;

    Ok((
        StatusCode::OK,
        Json(vehicles.into_iter().map(|v| v.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "The vehicle", body = VehicleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(vehicle) = VehicleService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound(VEHICLE_NOT_FOUND.to_string()));
    };

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// Register a vehicle. New vehicles start out available.
///
/// # Access Control
/// - `ManageVehicles` - Managers and dispatchers
///
/// # Returns
/// - `201 Created` - The created vehicle
/// - `400 Bad Request` - Missing field or duplicate license plate
#[utoipa::path(
    post,
    path = "/api/vehicles",
    tag = VEHICLE_TAG,
    security(("bearer" = [])),
    request_body = CreateVehicleDto,
    responses(
        (status = 201, description = "Created vehicle", body = VehicleDto),
        (status = 400, description = "Missing field or duplicate license plate", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateVehicleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageVehicles])
        .await?;

    let params = CreateVehicleParams::from_dto(extract_json(payload)?)?;
    let vehicle = VehicleService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(vehicle.into_dto())))
}

/// Partially update a vehicle, including its status.
///
/// Setting the status is how a vehicle is taken out of service or returned from
/// the shop.
///
/// # Access Control
/// - `ManageVehicles` - Managers and dispatchers
#[utoipa::path(
    put,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = UpdateVehicleDto,
    responses(
        (status = 200, description = "Updated vehicle", body = VehicleDto),
        (status = 400, description = "Unknown status or duplicate license plate", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateVehicleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageVehicles])
        .await?;

    let params = UpdateVehicleParams::from_dto(extract_json(payload)?)?;
    let Some(vehicle) = VehicleService::new(&state.db).update(id, params).await? else {
        return Err(AppError::NotFound(VEHICLE_NOT_FOUND.to_string()));
    };

    Ok((StatusCode::OK, Json(vehicle.into_dto())))
}

/// Delete a vehicle along with its maintenance, fuel and expense logs.
///
/// # Access Control
/// - `DeleteVehicles` - Managers only
///
/// # Returns
/// - `200 OK` - Vehicle deleted
/// - `404 Not Found` - No such vehicle
/// - `409 Conflict` - Trips still reference the vehicle
#[utoipa::path(
    delete,
    path = "/api/vehicles/{id}",
    tag = VEHICLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 409, description = "Vehicle has trips", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::DeleteVehicles])
        .await?;

    if !VehicleService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(VEHICLE_NOT_FOUND.to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Vehicle deleted.".to_string(),
        }),
    ))
}
