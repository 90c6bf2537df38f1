use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided price changes and the type and photo are kept.
///
/// Expected: Ok(Some) with new price, old type and photo
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .room_type("Suite")
        .photo(vec![1, 2, 3])
        .build()
        .await?;

    let updated = RoomRepository::new(db)
        .update(
            room.id,
            UpdateRoomParam {
                room_price: Some(Decimal::new(30000, 2)),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.room_type, "Suite");
    assert_eq!(updated.room_price, Decimal::new(30000, 2));
    assert_eq!(updated.photo, Some(vec![1, 2, 3]));

    Ok(())
}

/// Tests an update with no fields set.
///
/// Expected: Ok(Some) with the room unchanged
#[tokio::test]
async fn empty_update_returns_existing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room_of_type(db, "Double").await?;

    let updated = RoomRepository::new(db)
        .update(room.id, UpdateRoomParam::default())
        .await?
        .unwrap();

    assert_eq!(updated.id, room.id);
    assert_eq!(updated.room_type, "Double");

    Ok(())
}

/// Tests updating a room that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoomRepository::new(db)
        .update(
            42,
            UpdateRoomParam {
                room_type: Some("Suite".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
