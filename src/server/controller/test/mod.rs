use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{booking::CreateBookingDto, room::AvailableRoomsQuery},
    server::{
        data::{booking::BookingRepository, room::RoomRepository},
        error::{auth::AuthError, AppError},
        model::{
            auth::Principal,
            role::{ROLE_ADMIN, ROLE_USER},
        },
        service::auth::token::TokenKeys,
        state::AppState,
    },
};


async fn state_with_tables() -> AppState {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.unwrap();

    AppState::new(db, TokenKeys::new(b"controller-secret", 3600), crate::server::service::auth::password::MIN_COST)
}

fn guest(email: &str) -> Principal {
    Principal {
        id: 2,
        email: email.to_string(),
        roles: vec![ROLE_USER.to_string()],
    }
}

fn admin() -> Principal {
    Principal {
        id: 1,
        email: "admin@hotel.test".to_string(),
        roles: vec![ROLE_USER.to_string(), ROLE_ADMIN.to_string()],
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
