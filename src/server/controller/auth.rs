use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{JwtDto, LoginDto, RegisterUserDto},
        user::UserDto,
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// New accounts receive the `USER` role.
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - A required field is blank
/// - `409 Conflict` - Email is already registered
/// - `500 Internal Server Error` - Hashing or database error
#[utoipa::path(
    post,
    path = "/auth/register-user",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Registration successful", body = UserDto),
        (status = 400, description = "Missing registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.token_keys, state.bcrypt_cost)
        .register(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in and receive a bearer token.
///
/// # Returns
/// - `200 OK` - Token with the user's ID, email and roles
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Hashing, signing or database error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = JwtDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (principal, token) = AuthService::new(&state.db, &state.token_keys, state.bcrypt_cost)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(JwtDto {
            id: principal.id,
            email: principal.email,
            token,
            token_type: "Bearer".to_string(),
            roles: principal.roles,
        }),
    ))
}
