use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum BookingError {
    /// Check-in is not strictly before check-out.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Check-in date {check_in} must come before check-out date {check_out}")]
    InvalidRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    /// Another booking on the room overlaps the requested range.
    ///
    /// Results in a 409 Conflict response. Never retried server-side.
    #[error("Room {room_id} is not available for the selected dates")]
    RoomNotAvailable { room_id: i32 },

    /// Every generated confirmation code collided with an existing one.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to generate a unique confirmation code after {attempts} attempts")]
    CodeGeneration { attempts: usize },
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidRange { .. } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::RoomNotAvailable { .. } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Sorry, this room is not available for the selected dates".to_string(),
                }),
            )
                .into_response(),
            Self::CodeGeneration { .. } => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
