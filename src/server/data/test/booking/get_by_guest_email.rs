use super::*;

/// Tests listing a guest's bookings.
///
/// Verifies that only the guest's bookings are returned, ordered by check-in date.
///
/// Expected: Ok with two bookings, earliest first
#[tokio::test]
async fn returns_guest_bookings_by_check_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    factory::booking::BookingFactory::new(db, room.id)
        .guest_email("ada@example.com")
        .dates(date(2030, 9, 10), date(2030, 9, 12))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, room.id)
        .guest_email("ada@example.com")
        .dates(date(2030, 8, 1), date(2030, 8, 3))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, room.id)
        .guest_email("bob@example.com")
        .dates(date(2030, 7, 1), date(2030, 7, 3))
        .build()
        .await?;

    let bookings = BookingRepository::new(db)
        .get_by_guest_email("ada@example.com")
        .await?;

    let check_ins: Vec<NaiveDate> = bookings.iter().map(|b| b.booking.check_in_date).collect();
    assert_eq!(check_ins, vec![date(2030, 8, 1), date(2030, 9, 10)]);
    assert!(bookings.iter().all(|b| b.room.is_some()));

    Ok(())
}

/// Tests counting bookings on a room.
///
/// Expected: Ok(2) for the booked room and Ok(0) for the other
#[tokio::test]
async fn counts_bookings_per_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let booked = factory::room::create_room(db).await?;
    let empty = factory::room::create_room(db).await?;
    factory::booking::create_booking_for_dates(db, booked.id, date(2030, 1, 1), date(2030, 1, 2)).await?;
    factory::booking::create_booking_for_dates(db, booked.id, date(2030, 2, 1), date(2030, 2, 2)).await?;

    let repo = BookingRepository::new(db);

    assert_eq!(repo.count_by_room_id(booked.id).await?, 2);
    assert_eq!(repo.count_by_room_id(empty.id).await?, 0);
    assert_eq!(repo.get_by_room_id(booked.id).await?.len(), 2);

    Ok(())
}
