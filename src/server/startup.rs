use sea_orm::DatabaseConnection;

use crate::{
    model::user::Role,
    server::{
        config::Config,
        data::user::UserRepository,
        error::AppError,
        model::user::CreateUserParams,
        service::user::UserService,
    },
};

/// Connects to the SQLite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates a manager account when none exists so the first login is possible.
///
/// The generated password is logged once and never stored in plain text.
///
/// # Returns
/// - `Ok(true)` - Bootstrap manager created
/// - `Ok(false)` - A manager already exists
/// - `Err(AppError)` - Database error, or the bootstrap email belongs to a non-manager
pub async fn ensure_manager(db: &DatabaseConnection, config: &Config) -> Result<bool, AppError> {
    if UserRepository::new(db).manager_exists().await? {
        return Ok(false);
    }

    let params = CreateUserParams {
        full_name: "FleetFlow Manager".to_string(),
        email: config.bootstrap_manager_email.clone(),
        password: None,
        role: Role::Manager,
    };

    let (user, temp_password) = UserService::new(db).create(params).await?;

    tracing::info!(
        "No manager account found, created {} with temporary password: {}",
        user.email,
        temp_password.unwrap_or_default()
    );

    Ok(true)
}
