use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        trip::{CreateTripDto, TripDto, TripFilterDto, UpdateTripDto, UpdateTripStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::trip::{
            trip_status_filter, CreateTripParams, TripStatusChangeParams, UpdateTripParams,
        },
        service::trip::TripService,
        state::AppState,
        util::extract::extract_json,
    },
};

/// Tag for grouping trip endpoints in OpenAPI documentation
pub static TRIP_TAG: &str = "trip";

const TRIP_NOT_FOUND: &str = "Trip not found.";

/// List trips newest first with vehicle and driver display fields.
#[utoipa::path(
    get,
    path = "/api/trips",
    tag = TRIP_TAG,
    security(("bearer" = [])),
    params(TripFilterDto),
    responses(
        (status = 200, description = "Matching trips", body = Vec<TripDto>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trips(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<TripFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let status = trip_status_filter(filter)?;
    let trips = TripService::new(&state.db).get_all(status).await?;

    Ok((
        StatusCode::OK,
        Json(trips.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/trips/{id}",
    tag = TRIP_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Trip ID")),
    responses(
        (status = 200, description = "The trip", body = TripDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let Some(trip) = TripService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound(TRIP_NOT_FOUND.to_string()));
    };

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// Create a draft trip.
///
/// The vehicle must be available or on a trip and able to carry the cargo. The driver
/// must not be suspended and must hold an unexpired license.
///
/// # Access Control
/// - `ManageTrips` - Managers and dispatchers
///
/// # Returns
/// - `201 Created` - The draft trip
/// - `400 Bad Request` - Missing field or an assignment guard failed
/// - `404 Not Found` - Vehicle or driver does not exist
#[utoipa::path(
    post,
    path = "/api/trips",
    tag = TRIP_TAG,
    security(("bearer" = [])),
    request_body = CreateTripDto,
    responses(
        (status = 201, description = "Draft trip", body = TripDto),
        (status = 400, description = "Missing field or assignment not allowed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Vehicle or driver not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateTripDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageTrips])
        .await?;

    let params = CreateTripParams::from_dto(extract_json(payload)?, user.id)?;
    let trip = TripService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(trip.into_dto())))
}

/// Edit a trip's assignment, route or odometer readings.
///
/// Changing the vehicle, driver or cargo is only allowed on draft trips and re-runs
/// the creation guards.
///
/// # Access Control
/// - `ManageTrips` - Managers and dispatchers
#[utoipa::path(
    put,
    path = "/api/trips/{id}",
    tag = TRIP_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Trip ID")),
    request_body = UpdateTripDto,
    responses(
        (status = 200, description = "Updated trip", body = TripDto),
        (status = 400, description = "Assignment not allowed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Trip, vehicle or driver not found", body = ErrorDto),
        (status = 409, description = "Trip is no longer a draft", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_trip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateTripDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageTrips])
        .await?;

    let params = UpdateTripParams::from_dto(extract_json(payload)?);
    let Some(trip) = TripService::new(&state.db).update(id, params).await? else {
        return Err(AppError::NotFound(TRIP_NOT_FOUND.to_string()));
    };

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// Move a trip through its lifecycle.
///
/// Dispatching puts the vehicle on a trip and the driver on duty. Completing or
/// cancelling frees both. All row changes commit together.
///
/// # Access Control
/// - `ManageTrips` - Managers and dispatchers
///
/// # Returns
/// - `200 OK` - The trip after the transition
/// - `400 Bad Request` - Status missing or unknown, or `end_odometer` below the
///   start reading
/// - `404 Not Found` - No such trip
/// - `409 Conflict` - Transition not allowed from the current status
#[utoipa::path(
    patch,
    path = "/api/trips/{id}/status",
    tag = TRIP_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Trip ID")),
    request_body = UpdateTripStatusDto,
    responses(
        (status = 200, description = "Trip after the transition", body = TripDto),
        (status = 400, description = "Status missing or unknown, or end odometer too low", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Trip not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_trip_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateTripStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageTrips])
        .await?;

    let change = TripStatusChangeParams::from_dto(extract_json(payload)?)?;
    let trip = TripService::new(&state.db).change_status(id, change).await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}
