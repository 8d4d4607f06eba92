use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, CreatedUserDto, RegisterUserDto, RegisteredUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParams, RegisterUserParams},
        service::user::UserService,
        state::AppState,
        util::extract::extract_json,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Public self-registration.
///
/// Only the driver role may be requested; the role defaults to driver when omitted.
///
/// # Returns
/// - `201 Created` - Registered account
/// - `400 Bad Request` - Name, email or password missing
/// - `403 Forbidden` - Role other than driver requested
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Registered", body = RegisteredUserDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(extract_json(payload)?)?;
    let user = UserService::new(&state.db).register(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisteredUserDto {
            user: user.into_dto(),
        }),
    ))
}

/// Create an account with any role.
///
/// When no password is given a temporary one is generated and returned once.
///
/// # Access Control
/// - `ManageUsers` - Managers only
///
/// # Returns
/// - `201 Created` - Created account, with `temp_password` when one was generated
/// - `400 Bad Request` - Missing field or unknown role
/// - `401 Unauthorized` / `403 Forbidden` - Not a manager
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Created", body = CreatedUserDto),
        (status = 400, description = "Missing field or unknown role", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageUsers])
        .await?;

    let params = CreateUserParams::from_dto(extract_json(payload)?)?;
    let (user, temp_password) = UserService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserDto {
            user: user.into_dto(),
            temp_password,
        }),
    ))
}

/// List all accounts.
///
/// # Access Control
/// - `ManageUsers` - Managers only
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All accounts", body = Vec<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::ManageUsers])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}
