//! Booking service for business logic.
//!
//! This module provides the `BookingService`, the only writer of the booking ledger.
//! Booking creation takes the room's lock from `RoomLocks` and then runs its overlap
//! check and insert inside a single database transaction, so of two overlapping
//! requests for one room at most one is recorded.

pub mod code;
pub mod lock;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository},
    error::{booking::BookingError, AppError},
    model::booking::{Booking, BookingDetails, CreateBookingParam},
    service::booking::{code::generate_confirmation_code, lock::RoomLocks},
};

/// Maximum number of confirmation codes tried before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 5;

/// Service providing business logic for the booking ledger.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    room_locks: &'a RoomLocks,
    generate_code: fn() -> String,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `room_locks` - Shared per-room lock registry
    ///
    /// # Returns
    /// - `BookingService` - New service instance
    pub fn new(db: &'a DatabaseConnection, room_locks: &'a RoomLocks) -> Self {
        Self {
            db,
            room_locks,
            generate_code: generate_confirmation_code,
        }
    }

    /// Replaces the confirmation code generator.
    #[cfg(test)]
    pub fn with_code_generator(mut self, generate_code: fn() -> String) -> Self {
        self.generate_code = generate_code;
        self
    }

    /// Reserves a room for a guest.
    ///
    /// Validates the request and checks that the room exists, then holds the room's
    /// lock while a transaction re-checks the room and that no booking on it overlaps
    /// the requested stay,
    /// generates a confirmation code and inserts the booking. Any failure after the
    /// transaction starts rolls it back.
    ///
    /// # Arguments
    /// - `param` - Room, guest details and stay dates
    ///
    /// # Returns
    /// - `Ok(Booking)` - The recorded booking with its confirmation code
    /// - `Err(AppError::BookingErr(InvalidRange))` - Check-in is not before check-out
    /// - `Err(AppError::BadRequest)` - Guest details failed validation
    /// - `Err(AppError::NotFound)` - Room does not exist
    /// - `Err(AppError::BookingErr(RoomNotAvailable))` - Stay overlaps an existing booking
    /// - `Err(AppError::BookingErr(CodeGeneration))` - No unique code within the attempt limit
    /// - `Err(AppError::DbErr)` - Database error during the transaction
    pub async fn create_booking(&self, param: CreateBookingParam) -> Result<Booking, AppError> {
        let range = param.validate()?;

        if RoomRepository::new(self.db)
            .find_by_id(param.room_id)
            .await?
            .is_none()
        {
            return Err(room_not_found(param.room_id));
        }

        let _room_guard = self.room_locks.acquire(param.room_id).await;
        let txn = self.db.begin().await?;

        // The room may have been deleted while waiting for its lock.
        if RoomRepository::new(&txn)
            .find_by_id(param.room_id)
            .await?
            .is_none()
        {
            return Err(room_not_found(param.room_id));
        }

        let booking_repo = BookingRepository::new(&txn);
        if booking_repo.has_overlap(param.room_id, &range).await? {
            return Err(BookingError::RoomNotAvailable {
                room_id: param.room_id,
            }
            .into());
        }

        let confirmation_code = self.unique_confirmation_code(&booking_repo).await?;
        let booking = booking_repo.create(&param, confirmation_code).await?;

        txn.commit().await?;

        tracing::info!(
            "Booked room {} from {} to {} ({} night(s)), confirmation {}",
            booking.room_id,
            booking.check_in_date,
            booking.check_out_date,
            range.nights(),
            booking.confirmation_code
        );

        Ok(booking)
    }

    /// Cancels a booking by deleting it from the ledger.
    ///
    /// # Returns
    /// - `Ok(())` - Booking removed
    /// - `Err(AppError::NotFound)` - No booking with that ID, including one already cancelled
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn cancel_booking(&self, booking_id: i32) -> Result<(), AppError> {
        let rows = BookingRepository::new(self.db).delete(booking_id).await?;

        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "Booking {} not found",
                booking_id
            )));
        }

        tracing::info!("Cancelled booking {}", booking_id);

        Ok(())
    }

    pub async fn get_booking(&self, booking_id: i32) -> Result<Booking, AppError> {
        BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))
    }

    pub async fn get_all_bookings(&self) -> Result<Vec<BookingDetails>, AppError> {
        Ok(BookingRepository::new(self.db).get_all().await?)
    }

    pub async fn get_bookings_by_room(&self, room_id: i32) -> Result<Vec<Booking>, AppError> {
        Ok(BookingRepository::new(self.db)
            .get_by_room_id(room_id)
            .await?)
    }

    /// Looks up a booking and its room by confirmation code.
    ///
    /// # Returns
    /// - `Ok(BookingDetails)` - Booking found
    /// - `Err(AppError::NotFound)` - No booking with that code
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_confirmation_code(
        &self,
        confirmation_code: &str,
    ) -> Result<BookingDetails, AppError> {
        BookingRepository::new(self.db)
            .find_by_confirmation_code(confirmation_code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No booking found with confirmation code {}",
                    confirmation_code
                ))
            })
    }

    pub async fn get_bookings_by_guest_email(
        &self,
        email: &str,
    ) -> Result<Vec<BookingDetails>, AppError> {
        Ok(BookingRepository::new(self.db)
            .get_by_guest_email(email)
            .await?)
    }

    async fn unique_confirmation_code<C: ConnectionTrait>(
        &self,
        booking_repo: &BookingRepository<'_, C>,
    ) -> Result<String, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = (self.generate_code)();

            if !booking_repo.confirmation_code_exists(&code).await? {
                return Ok(code);
            }
        }

        Err(BookingError::CodeGeneration {
            attempts: MAX_CODE_ATTEMPTS,
        }
        .into())
    }
}

fn room_not_found(room_id: i32) -> AppError {
    AppError::NotFound(format!("Room {} not found", room_id))
}
