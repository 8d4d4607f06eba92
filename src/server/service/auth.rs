//! Authentication service.
//!
//! Checks login credentials against stored password hashes and issues bearer
//! tokens. Token verification for incoming requests lives in the auth middleware.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{LoginParams, User},
    service::auth::{password::verify_password, token::TokenService},
};

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token issuer shared through the application state
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Logs a user in with email and password.
    ///
    /// Unknown emails and wrong passwords fail with the same error.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Credentials valid, token issued
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, params: LoginParams) -> Result<(String, User), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&params.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&params.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user)?;

        tracing::debug!("User {} logged in", user.id);

        Ok((token, user))
    }
}
