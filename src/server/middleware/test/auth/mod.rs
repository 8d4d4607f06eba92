use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::user::User,
        service::auth::token::TokenService,
    },
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod permission;
mod require;

fn tokens() -> TokenService {
    TokenService::new("test-secret", Duration::hours(1))
}

/// Builds request headers carrying a bearer token for a stored user.
fn bearer_headers(tokens: &TokenService, user: &entity::user::Model) -> HeaderMap {
    let user = User::from_entity(user.clone()).unwrap();
    let token = tokens.issue(&user).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

async fn user_with_role(
    db: &DatabaseConnection,
    role: Role,
) -> Result<entity::user::Model, DbErr> {
    factory::user::create_user_with_role(db, role.as_str()).await
}
