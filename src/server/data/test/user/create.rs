use super::*;

/// Tests creating a new account.
///
/// Verifies that the user repository inserts the account with the given email,
/// name, role and password hash.
///
/// Expected: Ok with the stored fields returned
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(InsertUserParams {
            email: "dispatch@example.com".to_string(),
            password_hash: "hash".to_string(),
            full_name: "Dana Dispatch".to_string(),
            role: Role::Dispatcher,
        })
        .await?;

    assert_eq!(user.email, "dispatch@example.com");
    assert_eq!(user.full_name, "Dana Dispatch");
    assert_eq!(user.role, Role::Dispatcher);
    assert_eq!(user.password_hash, "hash");

    Ok(())
}

/// Tests inserting a second account with an existing email.
///
/// Verifies that the unique constraint on email surfaces as a unique violation.
///
/// Expected: Err recognised by `is_unique_violation`
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(InsertUserParams {
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            full_name: "Second".to_string(),
            role: Role::Driver,
        })
        .await;

    let err = result.unwrap_err();
    assert!(crate::server::error::is_unique_violation(&err));

    Ok(())
}
