use super::*;

/// Tests detecting an admin account.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_user_with_role(db, "ADMIN").await?;

    assert!(RoleRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Tests that holders of other roles do not count as admins.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_user_with_role(db, "USER").await?;
    factory::role::create_role(db, "ADMIN").await?;

    assert!(!RoleRepository::new(db).admin_exists().await?);

    Ok(())
}
