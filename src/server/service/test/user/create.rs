use super::*;

/// Tests creating an account without a password.
///
/// Verifies that a temporary password is generated, returned once, and accepted
/// by the stored hash.
///
/// Expected: Ok((user, Some(temp_password)))
#[tokio::test]
async fn generates_temp_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let (user, temp_password) = service
        .create(CreateUserParams {
            full_name: "Sasha Safety".to_string(),
            email: "safety@example.com".to_string(),
            password: None,
            role: Role::SafetyOfficer,
        })
        .await
        .unwrap();

    let temp_password = temp_password.unwrap();
    assert_eq!(user.role, Role::SafetyOfficer);
    assert!(verify_password(&temp_password, &user.password_hash));

    Ok(())
}

/// Tests creating an account with a chosen password.
///
/// Expected: Ok((user, None))
#[tokio::test]
async fn keeps_chosen_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let (user, temp_password) = service
        .create(CreateUserParams {
            full_name: "Fran Finance".to_string(),
            email: "fran@example.com".to_string(),
            password: Some("ledger".to_string()),
            role: Role::FinancialAnalyst,
        })
        .await
        .unwrap();

    assert!(temp_password.is_none());
    assert!(verify_password("ledger", &user.password_hash));

    Ok(())
}
