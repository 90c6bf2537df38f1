use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::booking::{CreateBookingParam, GuestDetails},
};

mod room;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn booking_param(room_id: i32, check_in: NaiveDate, check_out: NaiveDate) -> CreateBookingParam {
    CreateBookingParam {
        room_id,
        guest: GuestDetails {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            num_of_adults: 2,
            num_of_children: 0,
        },
        check_in_date: check_in,
        check_out_date: check_out,
    }
}
