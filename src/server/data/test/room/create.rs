use super::*;

/// Tests creating a room with a photo.
///
/// Verifies that the stored room keeps its type, two-decimal price and photo bytes
/// when read back.
///
/// Expected: Ok with matching fields
#[tokio::test]
async fn creates_room_with_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomRepository::new(db);
    let created = repo
        .create(CreateRoomParam {
            room_type: "Deluxe".to_string(),
            room_price: Decimal::new(25050, 2),
            photo: Some(vec![0xFF, 0xD8, 0xFF]),
        })
        .await?;

    let found = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(found.room_type, "Deluxe");
    assert_eq!(found.room_price, Decimal::new(25050, 2));
    assert_eq!(found.room_price.scale(), 2);
    assert_eq!(found.photo, Some(vec![0xFF, 0xD8, 0xFF]));

    Ok(())
}

/// Tests creating a room without a photo.
///
/// Expected: Ok with photo None
#[tokio::test]
async fn creates_room_without_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = RoomRepository::new(db)
        .create(CreateRoomParam {
            room_type: "Single".to_string(),
            room_price: Decimal::new(9900, 2),
            photo: None,
        })
        .await?;

    assert!(created.photo.is_none());
    assert_eq!(created.room_price, Decimal::new(9900, 2));

    Ok(())
}

/// Tests looking up a room that does not exist.
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

    let result = RoomRepository::new(db).find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
