use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum RoomError {
    /// Uploaded photo could not be read from the request body.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Error retrieving photo: {0}")]
    PhotoRetrieval(String),

    /// Price is missing, unparsable or not positive.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid room price '{0}'")]
    InvalidPrice(String),

    /// Room still has bookings and cannot be deleted.
    ///
    /// Results in a 409 Conflict response.
    #[error("Room {room_id} has {bookings} booking(s) and cannot be deleted")]
    HasBookings { room_id: i32, bookings: u64 },
}

impl IntoResponse for RoomError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::PhotoRetrieval(_) | Self::InvalidPrice(_) => StatusCode::BAD_REQUEST,
            Self::HasBookings { .. } => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
