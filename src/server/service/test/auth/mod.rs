use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        model::user::LoginParams,
        service::auth::{password::hash_with_iterations, token::TokenService, AuthService},
    },
};
use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod login;
