use super::*;

/// Tests recording a booking.
///
/// Verifies that guest details, dates, the guest total and the supplied code are
/// stored.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn creates_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let param = CreateBookingParam {
        room_id: room.id,
        guest: GuestDetails {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            num_of_adults: 2,
            num_of_children: 1,
        },
        check_in_date: date(2030, 5, 1),
        check_out_date: date(2030, 5, 4),
    };

    let repo = BookingRepository::new(db);
    let booking = repo.create(&param, "ABCDE12345".to_string()).await?;

    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.room_id, room.id);
    assert_eq!(stored.guest_full_name, "Ada Lovelace");
    assert_eq!(stored.guest_email, "ada@example.com");
    assert_eq!(stored.check_in_date, date(2030, 5, 1));
    assert_eq!(stored.check_out_date, date(2030, 5, 4));
    assert_eq!(stored.total_num_of_guests, 3);
    assert_eq!(stored.confirmation_code, "ABCDE12345");

    Ok(())
}

/// Tests that confirmation codes are unique.
///
/// Expected: Err(DbErr) on the second insert with the same code
#[tokio::test]
async fn rejects_duplicate_confirmation_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    factory::booking::BookingFactory::new(db, room.id)
        .confirmation_code("DUPLICATE1")
        .build()
        .await?;

    let param = CreateBookingParam {
        room_id: room.id,
        guest: GuestDetails {
            full_name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            num_of_adults: 1,
            num_of_children: 0,
        },
        check_in_date: date(2031, 1, 1),
        check_out_date: date(2031, 1, 2),
    };

    let result = BookingRepository::new(db)
        .create(&param, "DUPLICATE1".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
