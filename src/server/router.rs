use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{JwtDto, LoginDto, RegisterUserDto},
        booking::{BookedRoomDto, BookingDto, CreateBookingDto},
        role::{CreateRoleDto, RoleDto},
        room::{BookingInfoDto, RoomDto, RoomUploadDto},
        user::UserDto,
    },
    server::{
        config::Config,
        controller::{auth, booking, role, room, user},
        error::{config::ConfigError, AppError},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel Management API"),
    paths(
        auth::register_user,
        auth::login,
        room::add_new_room,
        room::get_room_types,
        room::get_all_rooms,
        room::delete_room,
        room::update_room,
        room::get_room_by_id,
        room::get_available_rooms,
        booking::get_all_bookings,
        booking::get_bookings_by_room,
        booking::save_booking,
        booking::get_booking_by_confirmation_code,
        booking::get_bookings_by_user_email,
        booking::cancel_booking,
        user::get_users,
        user::get_user_by_email,
        user::delete_user,
        role::get_all_roles,
        role::create_role,
        role::delete_role,
        role::remove_all_users_from_role,
        role::remove_user_from_role,
        role::assign_user_to_role,
    ),
    components(schemas(
        ErrorDto,
        RegisterUserDto,
        LoginDto,
        JwtDto,
        RoomDto,
        BookingInfoDto,
        RoomUploadDto,
        BookingDto,
        BookedRoomDto,
        CreateBookingDto,
        UserDto,
        RoleDto,
        CreateRoleDto,
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "room", description = "Room inventory and availability"),
        (name = "booking", description = "Room reservations"),
        (name = "user", description = "User accounts"),
        (name = "role", description = "Role management"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` scheme referenced by protected endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register-user", post(auth::register_user))
        .route("/auth/login", post(auth::login))
        .route("/rooms/add/new-room", post(room::add_new_room))
        .route("/rooms/room/types", get(room::get_room_types))
        .route("/rooms/all-rooms", get(room::get_all_rooms))
        .route("/rooms/delete/room/{room_id}", delete(room::delete_room))
        .route("/rooms/update/{room_id}", put(room::update_room))
        .route("/rooms/room/{room_id}", get(room::get_room_by_id))
        .route("/rooms/available-rooms", get(room::get_available_rooms))
        .route("/bookings/all-bookings", get(booking::get_all_bookings))
        .route(
            "/bookings/room/{room_id}/bookings",
            get(booking::get_bookings_by_room),
        )
        .route(
            "/bookings/room/{room_id}/booking",
            post(booking::save_booking),
        )
        .route(
            "/bookings/confirmation/{confirmation_code}",
            get(booking::get_booking_by_confirmation_code),
        )
        .route(
            "/bookings/user/{email}/bookings",
            get(booking::get_bookings_by_user_email),
        )
        .route(
            "/bookings/booking/{booking_id}/delete",
            delete(booking::cancel_booking),
        )
        .route("/users/all", get(user::get_users))
        .route("/users/{email}", get(user::get_user_by_email))
        .route("/users/delete/{email}", delete(user::delete_user))
        .route("/roles/all-roles", get(role::get_all_roles))
        .route("/roles/create-new-role", post(role::create_role))
        .route("/roles/delete/{role_id}", delete(role::delete_role))
        .route(
            "/roles/remove-all-users-from-role/{role_id}",
            post(role::remove_all_users_from_role),
        )
        .route(
            "/roles/remove-user-from-role",
            post(role::remove_user_from_role),
        )
        .route(
            "/roles/assign-user-to-role",
            post(role::assign_user_to_role),
        )
        .route("/api-docs/openapi.json", get(openapi_json))
}

/// Builds the CORS layer for the configured front-end origin.
///
/// Without a configured origin any origin is allowed.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer to apply to the router
/// - `Err(AppError::ConfigErr)` - `CORS_ALLOWED_ORIGIN` is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let Some(origin) = &config.cors_allowed_origin else {
        return Ok(layer.allow_origin(Any));
    };

    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "CORS_ALLOWED_ORIGIN".to_string(),
        value: origin.clone(),
    })?;

    Ok(layer.allow_origin(origin))
}

/// Assembles the application: routes, shared state, CORS and request tracing.
pub fn app(state: AppState, config: &Config) -> Result<Router, AppError> {
    Ok(router()
        .with_state(state)
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
