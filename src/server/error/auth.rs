use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No bearer token provided")]
    MissingToken,

    /// Bearer token is malformed, carries a bad signature, or has expired.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token verified but the user it names no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from bearer token not found in database")]
    UserNotInDatabase(i32),

    /// Login attempted with an unknown email or a wrong password.
    ///
    /// Both cases share one message so the response does not reveal which
    /// accounts exist. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks a role required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Message describing the denied permission, logged server-side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Public registration requested a role other than driver.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Public registration requested role '{0}'")]
    RegistrationRoleNotAllowed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` → 401 with "Access denied. No token provided."
/// - `InvalidToken` / `UserNotInDatabase` → 401 with "Invalid or expired token."
/// - `InvalidCredentials` → 401 with "Invalid email or password."
/// - `AccessDenied` → 403 with "Insufficient permissions."
/// - `RegistrationRoleNotAllowed` → 403 with the registration restriction
///
/// Details are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Access denied. No token provided."),
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid or expired token.")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password."),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions."),
            Self::RegistrationRoleNotAllowed(_) => (
                StatusCode::FORBIDDEN,
                "Public registration only allowed for driver role.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
