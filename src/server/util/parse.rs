use std::str::FromStr;

use crate::server::error::AppError;

/// Parses a status or role string supplied by a client.
///
/// # Arguments
/// - `value` - The raw string from the request
/// - `label` - What is being parsed, used in the error message (e.g. "vehicle status")
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::BadRequest)` - The string names no known value
pub fn parse_client_value<T: FromStr>(value: &str, label: &str) -> Result<T, AppError> {
    value
        .parse::<T>()
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: {}.", label, value)))
}

/// Parses an optional client string, passing `None` through.
pub fn parse_optional_client_value<T: FromStr>(
    value: Option<&str>,
    label: &str,
) -> Result<Option<T>, AppError> {
    value.map(|v| parse_client_value(v, label)).transpose()
}

/// Returns the value of a required request field.
///
/// Blank strings count as missing.
///
/// # Returns
/// - `Ok(String)` - The provided value
/// - `Err(AppError::BadRequest)` - Field absent or blank, with `message` as the error
pub fn required_text(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

/// Returns the value of a required non-text request field.
pub fn required<T>(value: Option<T>, message: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(message.to_string()))
}

/// Parses a stored enum column value at the repository boundary.
///
/// # Returns
/// - `Ok(T)` - Parsed value
/// - `Err(DbErr::Custom)` - The column holds a value outside the known set
pub fn parse_column<T: FromStr>(value: &str, column: &str) -> Result<T, sea_orm::DbErr> {
    value.parse::<T>().map_err(|_| {
        sea_orm::DbErr::Custom(format!("Unknown {} value stored: {}", column, value))
    })
}
