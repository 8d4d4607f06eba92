use super::*;

fn login(email: &str, password: &str) -> LoginParams {
    LoginParams {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Tests logging in with valid credentials.
///
/// Verifies that the issued token verifies and names the user and role.
///
/// Expected: Ok((token, user))
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("mgr@example.com")
        .role("manager")
        .password_hash(hash_with_iterations("pw", 100).unwrap())
        .build()
        .await?;

    let tokens = TokenService::new("secret", Duration::hours(1));
    let service = AuthService::new(db, &tokens);
    let (token, user) = service.login(login("mgr@example.com", "pw")).await.unwrap();

    assert_eq!(user.id, created.id);
    let claims = tokens.verify(&token).unwrap();
    assert_eq!(claims.sub, created.id);
    assert_eq!(claims.role, Role::Manager);

    Ok(())
}

/// Tests logging in with a wrong password and with an unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("mgr@example.com")
        .password_hash(hash_with_iterations("pw", 100).unwrap())
        .build()
        .await?;

    let tokens = TokenService::new("secret", Duration::hours(1));
    let service = AuthService::new(db, &tokens);

    let result = service.login(login("mgr@example.com", "wrong")).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let result = service.login(login("ghost@example.com", "pw")).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
