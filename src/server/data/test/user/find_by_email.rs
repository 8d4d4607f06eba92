use super::*;

/// Tests finding an account by email.
///
/// Expected: Ok(Some(user)) with the matching ID
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("finance@example.com")
        .role("financial_analyst")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("finance@example.com").await?.unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(user.role, Role::FinancialAnalyst);

    Ok(())
}

/// Tests looking up an email with no account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("nobody@example.com").await?;

    assert!(user.is_none());

    Ok(())
}
