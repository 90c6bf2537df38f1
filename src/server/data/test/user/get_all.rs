use super::*;

/// Tests listing users with their roles.
///
/// Verifies that each user carries only their own roles and users without roles are
/// still listed.
///
/// Expected: Ok with two users in ID order
#[tokio::test]
async fn lists_users_with_their_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, _) = factory::helpers::create_user_with_role(db, "ADMIN").await?;
    let plain = factory::user::create_user(db).await?;

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, admin.id);
    assert_eq!(users[0].roles, vec!["ADMIN"]);
    assert_eq!(users[1].id, plain.id);
    assert!(users[1].roles.is_empty());

    Ok(())
}

/// Tests deleting a user.
///
/// Expected: Ok(1) and the user is gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert_eq!(repo.delete(user.id).await?, 1);
    assert!(repo.find_by_id(user.id).await?.is_none());
    assert_eq!(repo.delete(user.id).await?, 0);

    Ok(())
}
