//! Room catalog domain models and parameters.
//!
//! Rooms carry their photo as raw bytes; base64 encoding happens only when a room
//! is converted to a DTO.

use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    model::room::{BookingInfoDto, RoomDto, RoomUploadDto},
    server::{
        error::{room::RoomError, AppError},
        model::booking::Booking,
    },
};

/// Room in the hotel catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub room_type: String,
    pub room_price: Decimal,
    pub photo: Option<Vec<u8>>,
}

impl Room {
    /// Converts an entity model to a room domain model at the repository boundary.
    ///
    /// Prices are normalized to two decimal places since some backends hand the
    /// value back with a different scale than it was written with.
    pub fn from_entity(entity: entity::room::Model) -> Self {
        let mut room_price = entity.room_price;
        room_price.rescale(2);

        Self {
            id: entity.id,
            room_type: entity.room_type,
            room_price,
            photo: entity.photo,
        }
    }

    /// Converts the room to a DTO with no booking history.
    pub fn into_dto(self) -> RoomDto {
        RoomDetails {
            room: self,
            bookings: Vec::new(),
            is_booked: false,
        }
        .into_dto()
    }
}

/// Room with its bookings and derived booked flag.
///
/// `is_booked` is informational only. Availability is always computed from the
/// booking ledger, never from this flag.
#[derive(Debug, Clone)]
pub struct RoomDetails {
    pub room: Room,
    pub bookings: Vec<Booking>,
    pub is_booked: bool,
}

impl RoomDetails {
    /// Builds room details, marking the room booked when any stay has not yet ended.
    ///
    /// # Arguments
    /// - `room` - The catalog room
    /// - `bookings` - All bookings on the room
    /// - `today` - Reference day for the booked flag
    pub fn new(room: Room, bookings: Vec<Booking>, today: NaiveDate) -> Self {
        let is_booked = bookings.iter().any(|b| b.check_out_date > today);

        Self {
            room,
            bookings,
            is_booked,
        }
    }

    /// Converts the room details to a DTO, encoding the photo as base64.
    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.room.id,
            room_type: self.room.room_type,
            room_price: self.room.room_price,
            is_booked: self.is_booked,
            photo: self.room.photo.map(|bytes| STANDARD.encode(bytes)),
            bookings: self
                .bookings
                .into_iter()
                .map(|b| BookingInfoDto {
                    id: b.id,
                    check_in_date: b.check_in_date,
                    check_out_date: b.check_out_date,
                    booking_confirmation_code: b.confirmation_code,
                })
                .collect(),
        }
    }
}

/// Parameters for adding a room to the catalog.
#[derive(Debug, Clone)]
pub struct CreateRoomParam {
    pub room_type: String,
    pub room_price: Decimal,
    pub photo: Option<Vec<u8>>,
}

impl CreateRoomParam {
    /// Builds room parameters from an uploaded form.
    ///
    /// # Returns
    /// - `Ok(CreateRoomParam)` - Type and price present and valid
    /// - `Err(AppError::BadRequest)` - Type or price missing
    /// - `Err(AppError::RoomErr(InvalidPrice))` - Price is not a positive decimal
    pub fn from_upload(upload: RoomUploadDto) -> Result<Self, AppError> {
        let room_type = non_blank(upload.room_type)
            .ok_or_else(|| AppError::BadRequest("Room type is required".to_string()))?;
        let room_price = non_blank(upload.room_price)
            .ok_or_else(|| AppError::BadRequest("Room price is required".to_string()))?;

        Ok(Self {
            room_type,
            room_price: parse_room_price(&room_price)?,
            photo: upload.photo.filter(|bytes| !bytes.is_empty()),
        })
    }
}

/// Parameters for updating a room in place.
///
/// Absent fields keep their current value. An absent photo keeps the existing photo.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParam {
    pub room_type: Option<String>,
    pub room_price: Option<Decimal>,
    pub photo: Option<Vec<u8>>,
}

impl UpdateRoomParam {
    /// Builds update parameters from an uploaded form.
    ///
    /// Blank text parts and empty photo parts count as absent.
    pub fn from_upload(upload: RoomUploadDto) -> Result<Self, RoomError> {
        let room_price = non_blank(upload.room_price)
            .map(|price| parse_room_price(&price))
            .transpose()?;

        Ok(Self {
            room_type: non_blank(upload.room_type),
            room_price,
            photo: upload.photo.filter(|bytes| !bytes.is_empty()),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Decimal places stored for a room price.
pub const ROOM_PRICE_SCALE: u32 = 2;

/// Integer digits stored for a room price (`DECIMAL(10, 2)`).
pub const ROOM_PRICE_INTEGER_DIGITS: u32 = 8;

/// Parses a room price from form input.
///
/// Trailing zeros beyond two decimal places are accepted; any other extra
/// precision is rejected rather than rounded.
///
/// # Returns
/// - `Ok(Decimal)` - Positive price with at most two decimal places and eight integer digits
/// - `Err(RoomError::InvalidPrice)` - Not a decimal number, zero or negative, or out of range
pub fn parse_room_price(value: &str) -> Result<Decimal, RoomError> {
    let invalid = || RoomError::InvalidPrice(value.to_string());

    let price = Decimal::from_str(value.trim())
        .map_err(|_| invalid())?
        .normalize();

    if price <= Decimal::ZERO || price.scale() > ROOM_PRICE_SCALE {
        return Err(invalid());
    }

    let limit = Decimal::from(10_i64.pow(ROOM_PRICE_INTEGER_DIGITS));
    if price.trunc() >= limit {
        return Err(invalid());
    }

    Ok(price)
}
