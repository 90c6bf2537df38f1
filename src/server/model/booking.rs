//! Booking domain models and parameters.
//!
//! Provides the booking ledger's domain types: the half-open stay range used for
//! every overlap decision, the booking record itself, and the parameters accepted
//! when a guest reserves a room.

use chrono::NaiveDate;

use crate::{
    model::booking::{BookedRoomDto, BookingDto, CreateBookingDto},
    server::{
        error::{booking::BookingError, AppError},
        model::room::Room,
    },
};

/// Half-open stay range `[check_in, check_out)`.
///
/// A guest occupies the room on the night of `check_in` through the night before
/// `check_out`, so a stay ending on a given day never collides with one starting
/// on that same day. Construction guarantees `check_in < check_out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl DateRange {
    /// Creates a stay range, rejecting empty or inverted ranges.
    ///
    /// # Arguments
    /// - `check_in` - First night of the stay
    /// - `check_out` - Departure day, exclusive
    ///
    /// # Returns
    /// - `Ok(DateRange)` - Range with `check_in < check_out`
    /// - `Err(BookingError::InvalidRange)` - `check_in >= check_out`
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, BookingError> {
        if check_in >= check_out {
            return Err(BookingError::InvalidRange {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights covered by the range.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Reservation of a room by a guest for a stay range.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub room_id: i32,
    pub guest_full_name: String,
    pub guest_email: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub num_of_adults: i32,
    pub num_of_children: i32,
    pub total_num_of_guests: i32,
    pub confirmation_code: String,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The booking entity model from the database
    ///
    /// # Returns
    /// - `Booking` - The converted booking domain model
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            room_id: entity.room_id,
            guest_full_name: entity.guest_full_name,
            guest_email: entity.guest_email,
            check_in_date: entity.check_in_date,
            check_out_date: entity.check_out_date,
            num_of_adults: entity.num_of_adults,
            num_of_children: entity.num_of_children,
            total_num_of_guests: entity.total_num_of_guests,
            confirmation_code: entity.confirmation_code,
        }
    }

    /// Converts the booking to a DTO without room details.
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            guest_full_name: self.guest_full_name,
            guest_email: self.guest_email,
            num_of_adults: self.num_of_adults,
            num_of_children: self.num_of_children,
            total_num_of_guests: self.total_num_of_guests,
            booking_confirmation_code: self.confirmation_code,
            room: None,
        }
    }
}

/// Booking together with the room it reserves.
///
/// Returned by lookups that join the room, such as confirmation code search.
#[derive(Debug, Clone)]
pub struct BookingDetails {
    pub booking: Booking,
    pub room: Option<Room>,
}

impl BookingDetails {
    /// Converts the booking and its room summary to a DTO for API responses.
    pub fn into_dto(self) -> BookingDto {
        let room = self.room.map(|room| BookedRoomDto {
            id: room.id,
            room_type: room.room_type,
            room_price: room.room_price,
        });

        BookingDto {
            room,
            ..self.booking.into_dto()
        }
    }
}

/// Largest number of adults or children accepted on a single booking.
pub const MAX_GUESTS_PER_GROUP: i32 = 100;

/// Guest details supplied with a booking request.
#[derive(Debug, Clone)]
pub struct GuestDetails {
    pub full_name: String,
    pub email: String,
    pub num_of_adults: i32,
    pub num_of_children: i32,
}

impl GuestDetails {
    /// Total head count for the stay.
    ///
    /// Saturates at `i32::MAX`.
    pub fn total_guests(&self) -> i32 {
        self.num_of_adults.saturating_add(self.num_of_children)
    }

    /// Checks that the guest can be recorded on a booking.
    ///
    /// # Returns
    /// - `Ok(())` - Between 1 and `MAX_GUESTS_PER_GROUP` adults, between 0 and
    ///   `MAX_GUESTS_PER_GROUP` children, non-blank name and email
    /// - `Err(AppError::BadRequest)` - Description of the first failed rule
    pub fn validate(&self) -> Result<(), AppError> {
        if self.full_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Guest full name must not be blank".to_string(),
            ));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Guest email must not be blank".to_string(),
            ));
        }
        if self.num_of_adults < 1 {
            return Err(AppError::BadRequest(
                "At least one adult is required".to_string(),
            ));
        }
        if self.num_of_children < 0 {
            return Err(AppError::BadRequest(
                "Number of children cannot be negative".to_string(),
            ));
        }
        if self.num_of_adults > MAX_GUESTS_PER_GROUP
            || self.num_of_children > MAX_GUESTS_PER_GROUP
        {
            return Err(AppError::BadRequest(format!(
                "At most {} adults and {} children can be booked at once",
                MAX_GUESTS_PER_GROUP, MAX_GUESTS_PER_GROUP
            )));
        }

        Ok(())
    }
}

/// Parameters for reserving a room.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub room_id: i32,
    pub guest: GuestDetails,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

impl CreateBookingParam {
    /// Builds booking parameters from a request body for the given room.
    pub fn from_dto(room_id: i32, dto: CreateBookingDto) -> Self {
        Self {
            room_id,
            guest: GuestDetails {
                full_name: dto.guest_full_name,
                email: dto.guest_email,
                num_of_adults: dto.num_of_adults,
                num_of_children: dto.num_of_children,
            },
            check_in_date: dto.check_in_date,
            check_out_date: dto.check_out_date,
        }
    }

    /// Validates the stay range and guest details.
    ///
    /// The range is checked first so an inverted range always surfaces as
    /// `BookingError::InvalidRange`.
    pub fn validate(&self) -> Result<DateRange, AppError> {
        let range = DateRange::new(self.check_in_date, self.check_out_date)?;
        self.guest.validate()?;

        Ok(range)
    }
}
