use rust_decimal::Decimal;

use super::*;
use crate::server::{
    data::room::RoomRepository,
    error::room::RoomError,
    model::room::{CreateRoomParam, UpdateRoomParam},
    service::{booking::lock::RoomLocks, room::RoomService},
};

/// Tests adding a room and reading it back with its details.
///
/// Expected: Ok with is_booked false and no bookings
#[tokio::test]
async fn adds_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();

    let service = RoomService::new(db, &locks);
    let room = service
        .add_room(CreateRoomParam {
            room_type: "Suite".to_string(),
            room_price: Decimal::new(45000, 2),
            photo: None,
        })
        .await?;

    let details = service.get_room(room.id).await?;

    assert_eq!(details.room.room_type, "Suite");
    assert!(!details.is_booked);
    assert!(details.bookings.is_empty());

    Ok(())
}

/// Tests that a room with a future stay is reported as booked.
///
/// Expected: is_booked true for the booked room and false for the other
#[tokio::test]
async fn marks_rooms_with_upcoming_stays_as_booked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();

    let (booked, _) = factory::helpers::create_room_with_booking(db).await?;
    let free = factory::room::create_room(db).await?;

    let rooms = RoomService::new(db, &locks).get_all_rooms().await?;

    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].room.id, booked.id);
    assert!(rooms[0].is_booked);
    assert_eq!(rooms[0].bookings.len(), 1);
    assert_eq!(rooms[1].room.id, free.id);
    assert!(!rooms[1].is_booked);

    Ok(())
}

/// Tests updating only the room type.
///
/// Expected: photo and price are unchanged
#[tokio::test]
async fn update_keeps_unset_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();

    let room = factory::room::RoomFactory::new(db)
        .photo(vec![9, 9, 9])
        .build()
        .await?;

    let details = RoomService::new(db, &locks)
        .update_room(
            room.id,
            UpdateRoomParam {
                room_type: Some("Family".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(details.room.room_type, "Family");
    assert_eq!(details.room.room_price, Decimal::new(10000, 2));
    assert_eq!(details.room.photo, Some(vec![9, 9, 9]));

    Ok(())
}

/// Tests updating a missing room.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn update_missing_room_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();

    let result = RoomService::new(db, &locks)
        .update_room(31, UpdateRoomParam::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a room that still has bookings.
///
/// Expected: Err(RoomErr(HasBookings)) and the room remains
#[tokio::test]
async fn refuses_to_delete_booked_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();

    let (room, _) = factory::helpers::create_room_with_booking(db).await?;

    let result = RoomService::new(db, &locks).delete_room(room.id).await;

    assert!(matches!(
        result,
        Err(AppError::RoomErr(RoomError::HasBookings { bookings: 1, .. }))
    ));
    assert!(RoomRepository::new(db).find_by_id(room.id).await?.is_some());

    Ok(())
}

/// Tests deleting a free room, then deleting it again.
///
/// Expected: Ok, then Err(NotFound)
#[tokio::test]
async fn deletes_free_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = RoomLocks::new();

    let room = factory::room::create_room(db).await?;
    let service = RoomService::new(db, &locks);

    service.delete_room(room.id).await?;

    assert!(matches!(
        service.delete_room(room.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
