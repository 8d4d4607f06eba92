//! User service for business logic.
//!
//! Handles public driver registration and manager-created accounts, including the
//! temporary password handed out when a manager creates an account without one.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        data::user::UserRepository,
        error::{is_unique_violation, AppError},
        model::user::{CreateUserParams, InsertUserParams, RegisterUserParams, User},
        service::auth::password::{generate_temp_password, hash_password},
    },
};

const DUPLICATE_EMAIL: &str = "User with this email already exists.";

/// Service providing business logic for account management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a driver account through the public endpoint.
    ///
    /// A duplicate email is reported before a missing password.
    ///
    /// # Returns
    /// - `Ok(User)` - The new driver account
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::BadRequest)` - No password given
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let Some(password) = params.password else {
            return Err(AppError::BadRequest(
                "Password is required for registration.".to_string(),
            ));
        };

        let user = self
            .insert(InsertUserParams {
                email: params.email,
                password_hash: hash_password(&password)?,
                full_name: params.full_name,
                role: Role::Driver,
            })
            .await?;

        tracing::info!("Registered driver account {}", user.id);

        Ok(user)
    }

    /// Creates an account of any role on behalf of a manager.
    ///
    /// # Returns
    /// - `Ok((User, Some(password)))` - Created with a generated temporary password
    /// - `Ok((User, None))` - Created with the password the manager chose
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn create(
        &self,
        params: CreateUserParams,
    ) -> Result<(User, Option<String>), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let (password, temp_password) = match params.password {
            Some(password) => (password, None),
            None => {
                let generated = generate_temp_password();
                (generated.clone(), Some(generated))
            }
        };

        let user = self
            .insert(InsertUserParams {
                email: params.email,
                password_hash: hash_password(&password)?,
                full_name: params.full_name,
                role: params.role,
            })
            .await?;

        tracing::info!("Created {} account {}", user.role, user.id);

        Ok((user, temp_password))
    }

    /// Lists all accounts ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.get_all().await?)
    }

    /// Inserts an account, mapping a lost race on the unique email to a conflict.
    async fn insert(&self, params: InsertUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo.create(params).await.map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Conflict(DUPLICATE_EMAIL.to_string())
            } else {
                err.into()
            }
        })
    }
}
