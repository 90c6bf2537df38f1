//! Booking factory for creating test booking entities.
//!
//! Bookings are inserted directly, bypassing the overlap check performed by the
//! booking service, so tests can set up any ledger state they need.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, room.id)
///     .dates(check_in, check_out)
///     .guest_email("guest@example.com")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    guest_full_name: String,
    guest_email: String,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    num_of_adults: i32,
    num_of_children: i32,
    confirmation_code: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - guest_full_name: `"Guest {id}"`
    /// - guest_email: `"guest{id}@example.com"`
    /// - check_in_date: 30 days from today
    /// - check_out_date: 33 days from today
    /// - num_of_adults: `2`, num_of_children: `0`
    /// - confirmation_code: `"CONF{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `room_id` - ID of the room being booked
    pub fn new(db: &'a DatabaseConnection, room_id: i32) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            room_id,
            guest_full_name: format!("Guest {}", id),
            guest_email: format!("guest{}@example.com", id),
            check_in_date: today + Duration::days(30),
            check_out_date: today + Duration::days(33),
            num_of_adults: 2,
            num_of_children: 0,
            confirmation_code: format!("CONF{}", id),
        }
    }

    /// Sets the check-in and check-out dates.
    pub fn dates(mut self, check_in_date: NaiveDate, check_out_date: NaiveDate) -> Self {
        self.check_in_date = check_in_date;
        self.check_out_date = check_out_date;
        self
    }

    /// Sets the guest email.
    pub fn guest_email(mut self, guest_email: impl Into<String>) -> Self {
        self.guest_email = guest_email.into();
        self
    }

    /// Sets the guest counts.
    pub fn guests(mut self, num_of_adults: i32, num_of_children: i32) -> Self {
        self.num_of_adults = num_of_adults;
        self.num_of_children = num_of_children;
        self
    }

    /// Sets the confirmation code.
    pub fn confirmation_code(mut self, code: impl Into<String>) -> Self {
        self.confirmation_code = code.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert (e.g. missing room)
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            room_id: ActiveValue::Set(self.room_id),
            guest_full_name: ActiveValue::Set(self.guest_full_name),
            guest_email: ActiveValue::Set(self.guest_email),
            check_in_date: ActiveValue::Set(self.check_in_date),
            check_out_date: ActiveValue::Set(self.check_out_date),
            num_of_adults: ActiveValue::Set(self.num_of_adults),
            num_of_children: ActiveValue::Set(self.num_of_children),
            total_num_of_guests: ActiveValue::Set(self.num_of_adults + self.num_of_children),
            confirmation_code: ActiveValue::Set(self.confirmation_code),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values on the given room.
pub async fn create_booking(
    db: &DatabaseConnection,
    room_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, room_id).build().await
}

/// Creates a booking on the given room for the given dates.
pub async fn create_booking_for_dates(
    db: &DatabaseConnection,
    room_id: i32,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, room_id)
        .dates(check_in_date, check_out_date)
        .build()
        .await
}
