use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Operational role attached to every account.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Dispatcher,
    SafetyOfficer,
    FinancialAnalyst,
    Driver,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Manager,
        Role::Dispatcher,
        Role::SafetyOfficer,
        Role::FinancialAnalyst,
        Role::Driver,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Dispatcher => "dispatcher",
            Role::SafetyOfficer => "safety_officer",
            Role::FinancialAnalyst => "financial_analyst",
            Role::Driver => "driver",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Public self-registration payload. Only the driver role may be requested.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct RegisterUserDto {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Manager-only account creation payload.
///
/// When `password` is omitted a temporary password is generated and returned once.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateUserDto {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct RegisteredUserDto {
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreatedUserDto {
    pub user: UserDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_password: Option<String>,
}
