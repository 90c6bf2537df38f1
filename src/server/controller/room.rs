use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        room::{AvailableRoomsQuery, RoomDto, RoomUploadDto},
    },
    server::{
        error::{room::RoomError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::{
            auth::Principal,
            room::{CreateRoomParam, UpdateRoomParam},
        },
        service::{availability::AvailabilityService, room::RoomService},
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// Add a room to the catalog.
///
/// Accepts a multipart form with `roomType`, `roomPrice` and an optional `photo`
/// file part.
///
/// # Access Control
/// - `Admin` - Only admins can add rooms
///
/// # Returns
/// - `201 Created` - The new room
/// - `400 Bad Request` - Missing type or price, invalid price, or unreadable photo
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/rooms/add/new-room",
    tag = ROOM_TAG,
    request_body(content = RoomUploadDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully added room", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn add_new_room(
    State(state): State<AppState>,
    principal: Principal,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    let upload = read_room_upload(multipart).await?;
    let param = CreateRoomParam::from_upload(upload)?;

    let room = RoomService::new(&state.db, &state.room_locks)
        .add_room(param)
        .await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

/// List the distinct room types in the catalog.
#[utoipa::path(
    get,
    path = "/rooms/room/types",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "Distinct room types, sorted", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let room_types = RoomService::new(&state.db, &state.room_locks)
        .get_room_types()
        .await?;

    Ok((StatusCode::OK, Json(room_types)))
}

/// List every room with its bookings.
#[utoipa::path(
    get,
    path = "/rooms/all-rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "All rooms ordered by ID", body = Vec<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db, &state.room_locks)
        .get_all_rooms()
        .await?;

    let rooms_dto: Vec<RoomDto> = rooms.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(rooms_dto)))
}

/// Delete a room.
///
/// # Access Control
/// - `Admin` - Only admins can delete rooms
///
/// # Returns
/// - `204 No Content` - Room deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No room with that ID
/// - `409 Conflict` - Room still has bookings
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/rooms/delete/room/{room_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted room"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Room still has bookings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_room(
    State(state): State<AppState>,
    principal: Principal,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    RoomService::new(&state.db, &state.room_locks)
        .delete_room(room_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Update a room in place.
///
/// Every multipart part is optional. Absent parts keep the stored value, including
/// the photo.
///
/// # Access Control
/// - `Admin` - Only admins can update rooms
///
/// # Returns
/// - `200 OK` - The updated room
/// - `400 Bad Request` - Invalid price or unreadable photo
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No room with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/rooms/update/{room_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    request_body(content = RoomUploadDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully updated room", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_room(
    State(state): State<AppState>,
    principal: Principal,
    Path(room_id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    let upload = read_room_upload(multipart).await?;
    let param = UpdateRoomParam::from_upload(upload)?;

    let room = RoomService::new(&state.db, &state.room_locks)
        .update_room(room_id, param)
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Get a room with its bookings.
#[utoipa::path(
    get,
    path = "/rooms/room/{room_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room found", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_by_id(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db, &state.room_locks)
        .get_room(room_id)
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Find rooms of a type that are free for a stay.
///
/// An empty list means no room of that type is free; it is not an error.
///
/// # Returns
/// - `200 OK` - Available rooms ordered by ID
/// - `400 Bad Request` - Check-in is not before check-out, or malformed dates
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/rooms/available-rooms",
    tag = ROOM_TAG,
    params(AvailableRoomsQuery),
    responses(
        (status = 200, description = "Available rooms", body = Vec<RoomDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_rooms(
    State(state): State<AppState>,
    Query(query): Query<AvailableRoomsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = AvailabilityService::new(&state.db)
        .find_available_rooms(&query.room_type, query.check_in_date, query.check_out_date)
        .await?;

    let rooms_dto: Vec<RoomDto> = rooms.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(rooms_dto)))
}

/// Collects the room form parts from a multipart body.
///
/// Unknown parts are ignored. A failure reading the photo part is reported as
/// `RoomError::PhotoRetrieval`.
async fn read_room_upload(mut multipart: Multipart) -> Result<RoomUploadDto, AppError> {
    let mut upload = RoomUploadDto::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("photo") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| RoomError::PhotoRetrieval(e.to_string()))?;
                upload.photo = Some(bytes.to_vec());
            }
            Some("roomType") => {
                upload.room_type = Some(field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Unreadable roomType: {}", e))
                })?);
            }
            Some("roomPrice") => {
                upload.room_price = Some(field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Unreadable roomPrice: {}", e))
                })?);
            }
            _ => {}
        }
    }

    Ok(upload)
}
