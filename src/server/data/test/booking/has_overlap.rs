use super::*;

/// Tests the overlap check against a booking for 10th to 15th.
///
/// Verifies half-open semantics: stays ending on the 10th or starting on the 15th
/// do not conflict, while any stay sharing a night does.
///
/// Expected: Ok(true) for shared nights, Ok(false) for adjacent stays
#[tokio::test]
async fn applies_half_open_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    factory::booking::create_booking_for_dates(db, room.id, date(2030, 3, 10), date(2030, 3, 15))
        .await?;

    let repo = BookingRepository::new(db);

    assert!(repo.has_overlap(room.id, &range(date(2030, 3, 10), date(2030, 3, 15))).await?);
    assert!(repo.has_overlap(room.id, &range(date(2030, 3, 8), date(2030, 3, 11))).await?);
    assert!(repo.has_overlap(room.id, &range(date(2030, 3, 14), date(2030, 3, 20))).await?);
    assert!(repo.has_overlap(room.id, &range(date(2030, 3, 11), date(2030, 3, 12))).await?);
    assert!(repo.has_overlap(room.id, &range(date(2030, 3, 1), date(2030, 3, 31))).await?);

    assert!(!repo.has_overlap(room.id, &range(date(2030, 3, 5), date(2030, 3, 10))).await?);
    assert!(!repo.has_overlap(room.id, &range(date(2030, 3, 15), date(2030, 3, 18))).await?);

    Ok(())
}

/// Tests that bookings on other rooms are ignored.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_other_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let booked = factory::room::create_room(db).await?;
    let free = factory::room::create_room(db).await?;
    factory::booking::create_booking_for_dates(db, booked.id, date(2030, 3, 10), date(2030, 3, 15))
        .await?;

    let overlap = BookingRepository::new(db)
        .has_overlap(free.id, &range(date(2030, 3, 10), date(2030, 3, 15)))
        .await?;

    assert!(!overlap);

    Ok(())
}
