use super::*;

/// Tests detecting an existing manager account.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_manager_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "manager").await?;

    let repo = UserRepository::new(db);
    assert!(repo.manager_exists().await?);

    Ok(())
}

/// Tests a database holding only non-manager accounts.
///
/// Verifies that other roles do not count towards the bootstrap check.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_other_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_role(db, "dispatcher").await?;
    factory::user::create_user_with_role(db, "driver").await?;

    let repo = UserRepository::new(db);
    assert!(!repo.manager_exists().await?);

    Ok(())
}
