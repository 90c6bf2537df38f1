use super::*;

/// Tests filtering rooms by exact type.
///
/// Expected: Ok with only the two "Double" rooms, ordered by ID
#[tokio::test]
async fn returns_only_matching_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::room::create_room_of_type(db, "Double").await?;
    factory::room::create_room_of_type(db, "Single").await?;
    let second = factory::room::create_room_of_type(db, "Double").await?;

    let rooms = RoomRepository::new(db).get_all_by_type("Double").await?;
    let ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that type matching is case-sensitive.
///
/// Expected: Ok(empty) for "double"
#[tokio::test]
async fn matches_type_case_sensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::create_room_of_type(db, "Double").await?;

    let rooms = RoomRepository::new(db).get_all_by_type("double").await?;

    assert!(rooms.is_empty());

    Ok(())
}
