use super::*;
use crate::server::service::auth::password::hash_with_iterations;

/// Tests the unauthenticated health route.
///
/// Expected: 200 with {"status": "ok"}
#[tokio::test]
async fn health_is_public() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let (status, body) = send(
        app(AppState::new(db, tokens())),
        Method::GET,
        "/api/health",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

/// Tests logging in with a stored password.
///
/// Expected: 200 with a token that authenticates GET /api/auth/user
#[tokio::test]
async fn login_then_fetch_user() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let hash = hash_with_iterations("hunter22", 2).unwrap();
    factory::user::UserFactory::new(&db)
        .email("dispatch@example.com")
        .password_hash(hash)
        .role("dispatcher")
        .build()
        .await
        .unwrap();

    let state = AppState::new(db, tokens());
    let (status, body) = send(
        app(state.clone()),
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "dispatch@example.com", "password": "hunter22" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "dispatcher");

    let token = body["token"].as_str().unwrap().to_string();
    let (status, body) = send(app(state), Method::GET, "/api/auth/user", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "dispatch@example.com");
}

/// Tests a bad password.
///
/// Expected: 401 with the generic credentials message
#[tokio::test]
async fn login_rejects_wrong_password() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let hash = hash_with_iterations("right-password", 2).unwrap();
    factory::user::UserFactory::new(&db)
        .email("someone@example.com")
        .password_hash(hash)
        .build()
        .await
        .unwrap();

    let (status, body) = send(
        app(AppState::new(db, tokens())),
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "someone@example.com", "password": "wrong" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid email or password.");
}

/// Tests a protected route without a token.
///
/// Expected: 401 Unauthorized
#[tokio::test]
async fn vehicles_require_token() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let (status, body) = send(
        app(AppState::new(db, tokens())),
        Method::GET,
        "/api/vehicles",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Access denied. No token provided.");
}
