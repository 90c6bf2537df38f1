use super::*;

/// Tests deleting an existing room.
///
/// Expected: Ok(1) and the room is gone
#[tokio::test]
async fn deletes_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::create_room(db).await?;
    let repo = RoomRepository::new(db);

    assert_eq!(repo.delete(room.id).await?, 1);
    assert!(repo.find_by_id(room.id).await?.is_none());

    Ok(())
}

/// Tests deleting a room that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Room)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(RoomRepository::new(db).delete(7).await?, 0);

    Ok(())
}
