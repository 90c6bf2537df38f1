use super::*;

/// Tests looking up a booking by code.
///
/// Expected: Ok(Some) with the booking and its room
#[tokio::test]
async fn returns_booking_with_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room_of_type(db, "Suite").await?;
    factory::booking::BookingFactory::new(db, room.id)
        .confirmation_code("LOOKUP0001")
        .build()
        .await?;

    let details = BookingRepository::new(db)
        .find_by_confirmation_code("LOOKUP0001")
        .await?
        .unwrap();

    assert_eq!(details.booking.confirmation_code, "LOOKUP0001");
    assert_eq!(details.room.unwrap().room_type, "Suite");

    Ok(())
}

/// Tests looking up an unknown code.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);

    assert!(repo.find_by_confirmation_code("NOPE000000").await?.is_none());
    assert!(!repo.confirmation_code_exists("NOPE000000").await?);

    Ok(())
}
