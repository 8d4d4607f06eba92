//! User domain models and parameters.
//!
//! Provides the account model used for authentication and role checks, and the
//! parameter types for public registration and manager-created accounts.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        auth::LoginDto,
        user::{CreateUserDto, RegisterUserDto, Role, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        util::parse::{parse_column, required_text},
    },
};

/// Application account with its operational role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// PBKDF2 hash string, never serialized to clients.
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped here.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            role: self.role,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - The stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            full_name: entity.full_name,
            role: parse_column(&entity.role, "user.role")?,
            created_at: entity.created_at,
        })
    }
}

/// Row values for inserting a new account.
#[derive(Debug, Clone)]
pub struct InsertUserParams {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
}

/// Public self-registration request.
///
/// The password stays optional here: a duplicate email is reported before a
/// missing password, so the service checks it after the email lookup.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub full_name: String,
    pub email: String,
    pub password: Option<String>,
}

impl RegisterUserParams {
    /// Validates the name, email and requested role of a registration.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - Name and email present, role absent or driver
    /// - `Err(AppError::BadRequest)` - Name or email missing
    /// - `Err(AuthError::RegistrationRoleNotAllowed)` - Any role other than driver
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        const MISSING: &str = "full_name and email are required.";

        let full_name = required_text(dto.full_name, MISSING)?;
        let email = required_text(dto.email, MISSING)?;

        if let Some(role) = dto.role.filter(|r| !r.is_empty()) {
            if role != Role::Driver.as_str() {
                return Err(AuthError::RegistrationRoleNotAllowed(role).into());
            }
        }

        Ok(Self {
            full_name,
            email,
            password: dto.password.filter(|p| !p.is_empty()),
        })
    }
}

/// Validated manager-created account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub full_name: String,
    pub email: String,
    /// Chosen password; a temporary one is generated when absent.
    pub password: Option<String>,
    pub role: Role,
}

impl CreateUserParams {
    /// Validates a manager's create-user request.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - All required fields present and role known
    /// - `Err(AppError::BadRequest)` - Missing field or unknown role
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        const MISSING: &str = "full_name, email and role are required.";

        let full_name = required_text(dto.full_name, MISSING)?;
        let email = required_text(dto.email, MISSING)?;
        let role = required_text(dto.role, MISSING)?;
        let role: Role = role
            .parse()
            .map_err(|_| AppError::BadRequest("Invalid role.".to_string()))?;

        Ok(Self {
            full_name,
            email,
            password: dto.password.filter(|p| !p.is_empty()),
            role,
        })
    }
}

/// Email and password submitted at login.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    /// # Returns
    /// - `Ok(LoginParams)` - Both fields present
    /// - `Err(AppError::BadRequest)` - Email or password missing
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        const MISSING: &str = "Email and password required.";

        Ok(Self {
            email: required_text(dto.email, MISSING)?,
            password: required_text(dto.password, MISSING)?,
        })
    }
}
