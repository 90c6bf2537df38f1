use super::*;

/// Tests creating a user.
///
/// Expected: Ok with the given names and email and no roles
#[tokio::test]
async fn creates_user_without_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(user_param("ada@example.com"))
        .await?;

    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "Lovelace");
    assert_eq!(user.email, "ada@example.com");
    assert!(user.roles.is_empty());

    Ok(())
}

/// Tests the unique email constraint.
///
/// Expected: Err(DbErr) for the second user with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(user_param("ada@example.com")).await?;

    let result = repo.create(user_param("ada@example.com")).await;

    assert!(result.is_err());
    assert!(repo.exists_by_email("ada@example.com").await?);

    Ok(())
}
