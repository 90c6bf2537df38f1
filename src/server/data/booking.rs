//! Booking ledger repository for database operations.
//!
//! This module provides the `BookingRepository` for recording and querying room
//! reservations. Overlap queries use the half-open rule: a booking conflicts with
//! `[check_in, check_out)` when `booking.check_in < check_out` and
//! `booking.check_out > check_in`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    booking::{Booking, BookingDetails, CreateBookingParam, DateRange},
    room::Room,
};

/// Repository providing database operations for the booking ledger.
///
/// Generic over the connection so the booking service can run its overlap check
/// and insert inside one transaction.
pub struct BookingRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `BookingRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booking with an already generated confirmation code.
    ///
    /// Does not check availability; callers are responsible for the overlap check.
    ///
    /// # Arguments
    /// - `param` - Room, guest and stay dates
    /// - `confirmation_code` - Unique confirmation code for the booking
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(DbErr)` - Database error, including unique or foreign key violations
    pub async fn create(
        &self,
        param: &CreateBookingParam,
        confirmation_code: String,
    ) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            room_id: ActiveValue::Set(param.room_id),
            guest_full_name: ActiveValue::Set(param.guest.full_name.clone()),
            guest_email: ActiveValue::Set(param.guest.email.clone()),
            check_in_date: ActiveValue::Set(param.check_in_date),
            check_out_date: ActiveValue::Set(param.check_out_date),
            num_of_adults: ActiveValue::Set(param.guest.num_of_adults),
            num_of_children: ActiveValue::Set(param.guest.num_of_children),
            total_num_of_guests: ActiveValue::Set(param.guest.total_guests()),
            confirmation_code: ActiveValue::Set(confirmation_code),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Finds a booking and its room by confirmation code.
    ///
    /// # Returns
    /// - `Ok(Some(BookingDetails))` - Booking found, with its room
    /// - `Ok(None)` - No booking with that code
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_confirmation_code(
        &self,
        confirmation_code: &str,
    ) -> Result<Option<BookingDetails>, DbErr> {
        let result = entity::prelude::Booking::find()
            .filter(entity::booking::Column::ConfirmationCode.eq(confirmation_code))
            .find_also_related(entity::prelude::Room)
            .one(self.db)
            .await?;

        Ok(result.map(|(booking, room)| BookingDetails {
            booking: Booking::from_entity(booking),
            room: room.map(Room::from_entity),
        }))
    }

    pub async fn confirmation_code_exists(&self, confirmation_code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::ConfirmationCode.eq(confirmation_code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets every booking with its room, ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<BookingDetails>, DbErr> {
        let results = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::Room)
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(booking, room)| BookingDetails {
                booking: Booking::from_entity(booking),
                room: room.map(Room::from_entity),
            })
            .collect())
    }

    /// Gets the bookings on a room ordered by check-in date.
    pub async fn get_by_room_id(&self, room_id: i32) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .order_by_asc(entity::booking::Column::CheckInDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Gets the bookings on any of the given rooms, ordered by room then check-in date.
    ///
    /// Returns early with an empty list when `room_ids` is empty.
    pub async fn get_by_room_ids(&self, room_ids: &[i32]) -> Result<Vec<Booking>, DbErr> {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.is_in(room_ids.to_vec()))
            .order_by_asc(entity::booking::Column::RoomId)
            .order_by_asc(entity::booking::Column::CheckInDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Gets a guest's bookings with their rooms, ordered by check-in date.
    pub async fn get_by_guest_email(&self, email: &str) -> Result<Vec<BookingDetails>, DbErr> {
        let results = entity::prelude::Booking::find()
            .filter(entity::booking::Column::GuestEmail.eq(email))
            .find_also_related(entity::prelude::Room)
            .order_by_asc(entity::booking::Column::CheckInDate)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(booking, room)| BookingDetails {
                booking: Booking::from_entity(booking),
                room: room.map(Room::from_entity),
            })
            .collect())
    }

    pub async fn count_by_room_id(&self, room_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .count(self.db)
            .await
    }

    /// Checks whether any booking on the room overlaps the range.
    ///
    /// # Arguments
    /// - `room_id` - Room to check
    /// - `range` - Requested stay
    ///
    /// # Returns
    /// - `Ok(true)` - At least one booking on the room shares a night with `range`
    /// - `Ok(false)` - The room is free for `range`
    /// - `Err(DbErr)` - Database error during count query
    pub async fn has_overlap(&self, room_id: i32, range: &DateRange) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::RoomId.eq(room_id))
            .filter(overlap_condition(range))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds which of the given rooms have a booking overlapping the range.
    ///
    /// # Arguments
    /// - `room_ids` - Candidate rooms
    /// - `range` - Requested stay
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Distinct IDs of rooms that are taken for `range`
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_booked_room_ids(
        &self,
        room_ids: &[i32],
        range: &DateRange,
    ) -> Result<Vec<i32>, DbErr> {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::RoomId)
            .distinct()
            .filter(entity::booking::Column::RoomId.is_in(room_ids.to_vec()))
            .filter(overlap_condition(range))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Deletes a booking by ID.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of bookings deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn overlap_condition(range: &DateRange) -> Condition {
    Condition::all()
        .add(entity::booking::Column::CheckInDate.lt(range.check_out()))
        .add(entity::booking::Column::CheckOutDate.gt(range.check_in()))
}
