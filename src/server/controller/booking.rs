use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{auth::Principal, booking::CreateBookingParam},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// List every booking with its room.
///
/// # Access Control
/// - `Admin` - Only admins can list all bookings
///
/// # Returns
/// - `200 OK` - All bookings ordered by ID
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/bookings/all-bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "All bookings", body = Vec<BookingDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_all_bookings(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    let bookings = BookingService::new(&state.db, &state.room_locks)
        .get_all_bookings()
        .await?;

    let bookings_dto: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings_dto)))
}

/// List the bookings on one room.
///
/// # Access Control
/// - `Admin` - Only admins can list a room's bookings
#[utoipa::path(
    get,
    path = "/bookings/room/{room_id}/bookings",
    tag = BOOKING_TAG,
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Bookings on the room ordered by check-in", body = Vec<BookingDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_bookings_by_room(
    State(state): State<AppState>,
    principal: Principal,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    let bookings = BookingService::new(&state.db, &state.room_locks)
        .get_bookings_by_room(room_id)
        .await?;

    let bookings_dto: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings_dto)))
}

/// Reserve a room.
///
/// The booking is recorded only if no existing booking on the room overlaps the
/// requested stay. Stays are half-open, so checking in on another guest's
/// check-out day is allowed.
///
/// # Access Control
/// - `SelfOrAdmin` - Users book under their own email; admins may book for anyone
///
/// # Returns
/// - `201 Created` - The booking with its confirmation code
/// - `400 Bad Request` - Check-in not before check-out, or invalid guest details
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Guest email belongs to someone else
/// - `404 Not Found` - Room does not exist
/// - `409 Conflict` - Room is not available for the selected dates
/// - `500 Internal Server Error` - Database error or no unique confirmation code
#[utoipa::path(
    post,
    path = "/bookings/room/{room_id}/booking",
    tag = BOOKING_TAG,
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Room booked", body = BookingDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Guest email belongs to another user", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Room not available for the selected dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn save_booking(
    State(state): State<AppState>,
    principal: Principal,
    Path(room_id): Path<i32>,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::SelfOrAdmin(payload.guest_email.clone())])?;

    let param = CreateBookingParam::from_dto(room_id, payload);
    let booking = BookingService::new(&state.db, &state.room_locks)
        .create_booking(param)
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Look up a booking by its confirmation code.
#[utoipa::path(
    get,
    path = "/bookings/confirmation/{confirmation_code}",
    tag = BOOKING_TAG,
    params(
        ("confirmation_code" = String, Path, description = "Booking confirmation code")
    ),
    responses(
        (status = 200, description = "Booking found", body = BookingDto),
        (status = 404, description = "No booking with that code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_by_confirmation_code(
    State(state): State<AppState>,
    Path(confirmation_code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db, &state.room_locks)
        .find_by_confirmation_code(&confirmation_code)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// List the bookings made under a guest email.
///
/// # Access Control
/// - `SelfOrAdmin` - Users see their own bookings; admins see anyone's
#[utoipa::path(
    get,
    path = "/bookings/user/{email}/bookings",
    tag = BOOKING_TAG,
    params(
        ("email" = String, Path, description = "Guest email")
    ),
    responses(
        (status = 200, description = "Bookings for the guest", body = Vec<BookingDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Email belongs to another user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_bookings_by_user_email(
    State(state): State<AppState>,
    principal: Principal,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::SelfOrAdmin(email.clone())])?;

    let bookings = BookingService::new(&state.db, &state.room_locks)
        .get_bookings_by_guest_email(&email)
        .await?;

    let bookings_dto: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings_dto)))
}

/// Cancel a booking.
///
/// # Access Control
/// - `SelfOrAdmin` - The booking's guest or an admin
///
/// # Returns
/// - `204 No Content` - Booking cancelled
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the guest nor an admin
/// - `404 Not Found` - No booking with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/bookings/booking/{booking_id}/delete",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 204, description = "Booking cancelled"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not cancel this booking", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    principal: Principal,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let booking_service = BookingService::new(&state.db, &state.room_locks);

    let booking = booking_service.get_booking(booking_id).await?;
    AuthGuard::new(&principal).require(&[Permission::SelfOrAdmin(booking.guest_email)])?;

    booking_service.cancel_booking(booking_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
