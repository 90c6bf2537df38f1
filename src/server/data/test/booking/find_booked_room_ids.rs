use super::*;

/// Tests finding which candidate rooms are taken for a stay.
///
/// Room A has an overlapping booking, room B only an adjacent one and room C none.
///
/// Expected: Ok([A])
#[tokio::test]
async fn returns_only_overlapping_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::room::create_room(db).await?;
    let b = factory::room::create_room(db).await?;
    let c = factory::room::create_room(db).await?;
    factory::booking::create_booking_for_dates(db, a.id, date(2030, 6, 1), date(2030, 6, 5)).await?;
    factory::booking::create_booking_for_dates(db, a.id, date(2030, 6, 3), date(2030, 6, 4)).await?;
    factory::booking::create_booking_for_dates(db, b.id, date(2030, 6, 5), date(2030, 6, 8)).await?;

    let booked = BookingRepository::new(db)
        .find_booked_room_ids(&[a.id, b.id, c.id], &range(date(2030, 6, 2), date(2030, 6, 5)))
        .await?;

    assert_eq!(booked, vec![a.id]);

    Ok(())
}

/// Tests the query with no candidate rooms.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_no_candidates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let booked = BookingRepository::new(db)
        .find_booked_room_ids(&[], &range(date(2030, 6, 2), date(2030, 6, 5)))
        .await?;

    assert!(booked.is_empty());

    Ok(())
}
