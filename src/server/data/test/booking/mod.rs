use crate::server::{
    data::booking::BookingRepository,
    model::booking::{CreateBookingParam, DateRange, GuestDetails},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_booked_room_ids;
mod find_by_confirmation_code;
mod get_by_guest_email;
mod has_overlap;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn range(check_in: NaiveDate, check_out: NaiveDate) -> DateRange {
    DateRange::new(check_in, check_out).unwrap()
}
