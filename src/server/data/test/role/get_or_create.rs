use super::*;

/// Tests that get_or_create reuses an existing role.
///
/// Expected: Ok with the same ID on both calls and a single stored role
#[tokio::test]
async fn reuses_existing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);
    let first = repo.get_or_create("USER").await?;
    let second = repo.get_or_create("USER").await?;

    assert_eq!(first.id, second.id);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests listing roles.
///
/// Expected: Ok with roles sorted by name
#[tokio::test]
async fn lists_roles_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);
    repo.create("USER").await?;
    repo.create("ADMIN").await?;
    repo.create("MANAGER").await?;

    let names: Vec<String> = repo.get_all().await?.into_iter().map(|r| r.name).collect();

    assert_eq!(names, vec!["ADMIN", "MANAGER", "USER"]);

    Ok(())
}

/// Tests the unique role name constraint.
///
/// Expected: Err(DbErr) on the second create
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRepository::new(db);
    repo.create("USER").await?;

    assert!(repo.create("USER").await.is_err());

    Ok(())
}
