use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::User,
        service::auth::token::TokenService,
    },
};

/// Operations gated by role. Each maps to the set of roles allowed to perform it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    ManageVehicles,
    DeleteVehicles,
    ManageDrivers,
    ManageTrips,
    LogMaintenance,
    LogFuel,
    LogExpenses,
    ViewCosts,
    ManageUsers,
}

impl Permission {
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Permission::ManageVehicles => &[Role::Manager, Role::Dispatcher],
            Permission::DeleteVehicles => &[Role::Manager],
            Permission::ManageDrivers => &[Role::Manager, Role::Dispatcher, Role::SafetyOfficer],
            Permission::ManageTrips => &[Role::Manager, Role::Dispatcher],
            Permission::LogMaintenance => &[Role::Manager, Role::Dispatcher],
            Permission::LogFuel => &[Role::Manager, Role::Dispatcher, Role::FinancialAnalyst],
            Permission::LogExpenses => &[Role::Manager, Role::FinancialAnalyst],
            Permission::ViewCosts => &[Role::Manager, Role::FinancialAnalyst],
            Permission::ManageUsers => &[Role::Manager],
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the request's bearer token and checks every listed permission.
    ///
    /// The role is taken from the stored account rather than the token, so a role
    /// change applies on the next request.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding every permission
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Token malformed, tampered with or expired
    /// - `Err(AuthError::UserNotInDatabase)` - Token names a deleted user
    /// - `Err(AuthError::AccessDenied)` - User's role lacks a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        let Some(user) = user_repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        for permission in permissions {
            if !permission.allows(user.role) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!("{} lacks {:?}", user.role, permission),
                )
                .into());
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
