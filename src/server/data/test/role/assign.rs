use super::*;

/// Tests granting and revoking a role.
///
/// Expected: user_has_role flips from false to true and back
#[tokio::test]
async fn assigns_and_removes_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let role = factory::role::create_role(db, "MANAGER").await?;
    let repo = RoleRepository::new(db);

    assert!(!repo.user_has_role(user.id, role.id).await?);

    repo.assign(user.id, role.id).await?;
    assert!(repo.user_has_role(user.id, role.id).await?);

    assert_eq!(repo.remove(user.id, role.id).await?, 1);
    assert!(!repo.user_has_role(user.id, role.id).await?);
    assert_eq!(repo.remove(user.id, role.id).await?, 0);

    Ok(())
}

/// Tests revoking a role from every holder.
///
/// Expected: Ok(2) and neither user holds the role afterwards
#[tokio::test]
async fn removes_all_users_from_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, role) = factory::helpers::create_user_with_role(db, "MANAGER").await?;
    let second = factory::user::create_user(db).await?;
    factory::role::assign_role(db, second.id, role.id).await?;

    let repo = RoleRepository::new(db);

    assert_eq!(repo.remove_all_from_role(role.id).await?, 2);
    assert!(!repo.user_has_role(first.id, role.id).await?);
    assert!(!repo.user_has_role(second.id, role.id).await?);
    assert!(repo.find_by_id(role.id).await?.is_some());

    Ok(())
}
