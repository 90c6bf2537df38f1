use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_full_name: String,
    pub guest_email: String,
    pub num_of_adults: i32,
    #[serde(default)]
    pub num_of_children: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_full_name: String,
    pub guest_email: String,
    pub num_of_adults: i32,
    pub num_of_children: i32,
    pub total_num_of_guests: i32,
    pub booking_confirmation_code: String,
    pub room: Option<BookedRoomDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookedRoomDto {
    pub id: i32,
    pub room_type: String,
    #[schema(value_type = String, example = "120.00")]
    pub room_price: Decimal,
}
