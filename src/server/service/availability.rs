//! Availability engine.
//!
//! Answers which rooms of a type can be reserved for a stay. Availability is derived
//! from the booking ledger on every call; the room's booked flag is never consulted.

use std::collections::HashSet;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository},
    error::AppError,
    model::{booking::DateRange, room::Room},
};

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds rooms of a type with no booking overlapping the stay.
    ///
    /// Touching stays are not conflicts: a room whose booking checks out on
    /// `check_in` is available.
    ///
    /// # Arguments
    /// - `room_type` - Room type to match exactly
    /// - `check_in` - First night of the stay
    /// - `check_out` - Departure day, exclusive
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Available rooms ordered by ID (empty if none)
    /// - `Err(AppError::BookingErr(InvalidRange))` - `check_in >= check_out`
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_available_rooms(
        &self,
        room_type: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<Room>, AppError> {
        let range = DateRange::new(check_in, check_out)?;

        let rooms = RoomRepository::new(self.db)
            .get_all_by_type(room_type)
            .await?;
        let room_ids: Vec<i32> = rooms.iter().map(|room| room.id).collect();

        let booked: HashSet<i32> = BookingRepository::new(self.db)
            .find_booked_room_ids(&room_ids, &range)
            .await?
            .into_iter()
            .collect();

        Ok(rooms
            .into_iter()
            .filter(|room| !booked.contains(&room.id))
            .collect())
    }
}
