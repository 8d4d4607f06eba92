use axum::{extract::rejection::JsonRejection, Json};

use crate::server::error::AppError;

/// Extracts a JSON body, mapping deserialization failures to `AppError::BadRequest`.
///
/// Handlers take `Result<Json<T>, JsonRejection>` so malformed bodies produce the
/// service's `{"error": ...}` shape with a 400 instead of axum's plain-text 422.
///
/// # Arguments
/// - `result` - The extractor result for the request body
///
/// # Returns
/// - `Ok(T)` - Deserialized body
/// - `Err(AppError::BadRequest)` - Body missing, not JSON, or wrong shape
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(value)| value)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
