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
        expense::{CreateExpenseDto, ExpenseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::expense::CreateExpenseParams,
        service::expense::ExpenseService,
        state::AppState,
        util::extract::extract_json,
    },
};

/// Tag for grouping expense endpoints in OpenAPI documentation
pub static EXPENSE_TAG: &str = "expense";

#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = EXPENSE_TAG,
    security(("bearer" = [])),
    params(VehicleIdFilterDto),
    responses(
        (status = 200, description = "Expenses", body = Vec<ExpenseDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_expenses(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<VehicleIdFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let expenses = ExpenseService::new(&state.db)
        .get_all(filter.vehicle_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(expenses.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Record a miscellaneous vehicle expense such as tolls.
///
/// # Access Control
/// - `LogExpenses` - Managers and financial analysts
#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = EXPENSE_TAG,
    security(("bearer" = [])),
    request_body = CreateExpenseDto,
    responses(
        (status = 201, description = "Created expense", body = ExpenseDto),
        (status = 400, description = "Missing field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 404, description = "Vehicle or trip not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateExpenseDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::LogExpenses])
        .await?;

    let params = CreateExpenseParams::from_dto(extract_json(payload)?, Utc::now().date_naive())?;
    let expense = ExpenseService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(expense.into_dto())))
}
