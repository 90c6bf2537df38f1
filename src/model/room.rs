use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i32,
    pub room_type: String,
    #[schema(value_type = String, example = "120.00")]
    pub room_price: Decimal,
    pub is_booked: bool,
    /// Base64 encoded photo bytes.
    pub photo: Option<String>,
    pub bookings: Vec<BookingInfoDto>,
}

/// Booking summary nested in a room.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingInfoDto {
    pub id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub booking_confirmation_code: String,
}

/// Multipart form accepted when adding or updating a room.
///
/// Every part is optional on update; type and price are required when adding.
#[derive(Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomUploadDto {
    #[schema(value_type = Option<String>, format = Binary)]
    pub photo: Option<Vec<u8>>,
    pub room_type: Option<String>,
    #[schema(example = "120.00")]
    pub room_price: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AvailableRoomsQuery {
    /// ISO date, e.g. `2024-03-05`
    pub check_in_date: NaiveDate,
    /// ISO date, must be after `checkInDate`
    pub check_out_date: NaiveDate,
    pub room_type: String,
}
