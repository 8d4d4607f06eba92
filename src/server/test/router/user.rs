use super::*;

/// Tests the manager-only account creation with a generated password.
///
/// Expected: 201 with a temp_password and the requested role
#[tokio::test]
async fn manager_creates_user_with_temp_password() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();
    let tokens = tokens();
    let token = token_for(&db, &tokens, "manager").await;

    let (status, body) = send(
        app(AppState::new(db, tokens)),
        Method::POST,
        "/api/users",
        Some(&token),
        Some(json!({
            "full_name": "Fin Analyst",
            "email": "fin@example.com",
            "role": "financial_analyst"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["role"], "financial_analyst");
    assert_eq!(body["temp_password"].as_str().unwrap().len(), 12);
}
