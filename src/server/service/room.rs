//! Room catalog service for business logic.
//!
//! This module provides the `RoomService` for managing the room catalog. Rooms that
//! still have bookings cannot be deleted.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository},
    error::{room::RoomError, AppError},
    model::{
        booking::Booking,
        room::{CreateRoomParam, Room, RoomDetails, UpdateRoomParam},
    },
    service::booking::lock::RoomLocks,
};

/// Service providing business logic for the room catalog.
pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
    room_locks: &'a RoomLocks,
}

impl<'a> RoomService<'a> {
    /// Creates a new RoomService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `room_locks` - Shared per-room lock registry, held while deleting a room
    ///
    /// # Returns
    /// - `RoomService` - New service instance
    pub fn new(db: &'a DatabaseConnection, room_locks: &'a RoomLocks) -> Self {
        Self { db, room_locks }
    }

    /// Adds a room to the catalog.
    pub async fn add_room(&self, param: CreateRoomParam) -> Result<Room, AppError> {
        let room = RoomRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Added room {} ({}, {})",
            room.id,
            room.room_type,
            room.room_price
        );

        Ok(room)
    }

    /// Updates a room in place.
    ///
    /// # Returns
    /// - `Ok(RoomDetails)` - The updated room with its bookings
    /// - `Err(AppError::NotFound)` - No room with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_room(
        &self,
        room_id: i32,
        param: UpdateRoomParam,
    ) -> Result<RoomDetails, AppError> {
        let room = RoomRepository::new(self.db)
            .update(room_id, param)
            .await?
            .ok_or_else(|| room_not_found(room_id))?;

        tracing::info!("Updated room {}", room_id);

        self.with_bookings(room).await
    }

    /// Deletes a room from the catalog.
    ///
    /// Holds the room's lock so no booking can be recorded between the booking
    /// count and the delete.
    ///
    /// # Returns
    /// - `Ok(())` - Room deleted
    /// - `Err(AppError::NotFound)` - No room with that ID
    /// - `Err(AppError::RoomErr(HasBookings))` - Room still has bookings
    /// - `Err(AppError::DbErr)` - Database error during query or delete
    pub async fn delete_room(&self, room_id: i32) -> Result<(), AppError> {
        let _room_guard = self.room_locks.acquire(room_id).await;

        let room_repo = RoomRepository::new(self.db);
        if room_repo.find_by_id(room_id).await?.is_none() {
            return Err(room_not_found(room_id));
        }

        let bookings = BookingRepository::new(self.db)
            .count_by_room_id(room_id)
            .await?;
        if bookings > 0 {
            return Err(RoomError::HasBookings { room_id, bookings }.into());
        }

        room_repo.delete(room_id).await?;

        tracing::info!("Deleted room {}", room_id);

        Ok(())
    }

    /// Gets a room with its bookings.
    ///
    /// # Returns
    /// - `Ok(RoomDetails)` - Room found
    /// - `Err(AppError::NotFound)` - No room with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_room(&self, room_id: i32) -> Result<RoomDetails, AppError> {
        let room = RoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| room_not_found(room_id))?;

        self.with_bookings(room).await
    }

    /// Gets every room with its bookings, ordered by ID.
    pub async fn get_all_rooms(&self) -> Result<Vec<RoomDetails>, AppError> {
        let rooms = RoomRepository::new(self.db).get_all().await?;
        let room_ids: Vec<i32> = rooms.iter().map(|room| room.id).collect();

        let mut bookings_by_room: HashMap<i32, Vec<Booking>> = HashMap::new();
        for booking in BookingRepository::new(self.db)
            .get_by_room_ids(&room_ids)
            .await?
        {
            bookings_by_room
                .entry(booking.room_id)
                .or_default()
                .push(booking);
        }

        let today = Utc::now().date_naive();

        Ok(rooms
            .into_iter()
            .map(|room| {
                let bookings = bookings_by_room.remove(&room.id).unwrap_or_default();
                RoomDetails::new(room, bookings, today)
            })
            .collect())
    }

    pub async fn get_room_types(&self) -> Result<Vec<String>, AppError> {
        Ok(RoomRepository::new(self.db).get_room_types().await?)
    }

    async fn with_bookings(&self, room: Room) -> Result<RoomDetails, AppError> {
        let bookings = BookingRepository::new(self.db)
            .get_by_room_id(room.id)
            .await?;

        Ok(RoomDetails::new(room, bookings, Utc::now().date_naive()))
    }
}

fn room_not_found(room_id: i32) -> AppError {
    AppError::NotFound(format!("Room {} not found", room_id))
}
