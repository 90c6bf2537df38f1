use super::*;

/// Tests loading a user together with their roles.
///
/// Expected: Ok(Some) with both role names
#[tokio::test]
async fn returns_user_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_email(db, "ada@example.com").await?;
    let role_repo = RoleRepository::new(db);
    let user_role = role_repo.create("USER").await?;
    let admin_role = role_repo.create("ADMIN").await?;
    role_repo.assign(user.id, user_role.id).await?;
    role_repo.assign(user.id, admin_role.id).await?;

    let found = UserRepository::new(db)
        .find_by_email("ada@example.com")
        .await?
        .unwrap();

    let mut roles = found.roles.clone();
    roles.sort();
    assert_eq!(found.id, user.id);
    assert_eq!(roles, vec!["ADMIN", "USER"]);

    Ok(())
}

/// Tests loading login credentials.
///
/// Expected: Ok(Some) with the stored password hash
#[tokio::test]
async fn returns_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(user_param("ada@example.com")).await?;

    let credentials = repo
        .find_credentials_by_email("ada@example.com")
        .await?
        .unwrap();

    assert_eq!(credentials.id, user.id);
    assert_eq!(credentials.password_hash, "$2b$04$hash");

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None) for both lookups
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());
    assert!(repo
        .find_credentials_by_email("nobody@example.com")
        .await?
        .is_none());
    assert!(!repo.exists_by_email("nobody@example.com").await?);

    Ok(())
}
