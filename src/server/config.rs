use std::str::FromStr;

use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_TOKEN_TTL_HOURS: i64 = 168;
/// Ten years.
const MAX_TOKEN_TTL_HOURS: i64 = 87_600;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;
const DEFAULT_BOOTSTRAP_MANAGER_EMAIL: &str = "admin@fleetflow.local";

pub struct Config {
    pub database_url: String,

    pub auth_token_secret: String,
    /// Lifetime of issued tokens, between one hour and `MAX_TOKEN_TTL_HOURS`.
    pub auth_token_ttl: Duration,

    pub host: String,
    pub port: u16,

    /// Email of the manager account created when the database has none.
    pub bootstrap_manager_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value parsed
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or blank
    /// - `Err(ConfigError::InvalidEnvVar)` - A numeric variable failed to parse or
    ///   the token TTL is out of range
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &str| {
            optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            auth_token_secret: required("AUTH_TOKEN_SECRET")?,
            auth_token_ttl: parse_ttl(optional("AUTH_TOKEN_TTL_HOURS"))?,
            host: optional("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", optional("PORT"), DEFAULT_PORT)?,
            bootstrap_manager_email: optional("BOOTSTRAP_MANAGER_EMAIL")
                .unwrap_or_else(|| DEFAULT_BOOTSTRAP_MANAGER_EMAIL.to_string()),
        })
    }
}

fn parse_or<T: FromStr>(name: &str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: raw,
        }),
    }
}

fn parse_ttl(value: Option<String>) -> Result<Duration, ConfigError> {
    const NAME: &str = "AUTH_TOKEN_TTL_HOURS";

    let hours: i64 = parse_or(NAME, value, DEFAULT_TOKEN_TTL_HOURS)?;

    (1..=MAX_TOKEN_TTL_HOURS)
        .contains(&hours)
        .then(|| Duration::try_hours(hours))
        .flatten()
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: NAME.to_string(),
            value: hours.to_string(),
        })
}
