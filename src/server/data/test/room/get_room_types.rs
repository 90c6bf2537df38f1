use super::*;

/// Tests listing distinct room types.
///
/// Verifies that duplicate types collapse to one entry and the result is sorted.
///
/// Expected: Ok(["Double", "Single", "Suite"])
#[tokio::test]
async fn returns_distinct_sorted_types() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::create_room_of_type(db, "Suite").await?;
    factory::room::create_room_of_type(db, "Single").await?;
    factory::room::create_room_of_type(db, "Double").await?;
    factory::room::create_room_of_type(db, "Single").await?;

    let types = RoomRepository::new(db).get_room_types().await?;

    assert_eq!(types, vec!["Double", "Single", "Suite"]);

    Ok(())
}

/// Tests listing room types with no rooms.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let types = RoomRepository::new(db).get_room_types().await?;

    assert!(types.is_empty());

    Ok(())
}
