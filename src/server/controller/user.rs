use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::auth::Principal,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users with their roles.
///
/// # Access Control
/// - `Admin` - Only admins can list users
#[utoipa::path(
    get,
    path = "/users/all",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_users(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    let users = UserService::new(&state.db).get_users().await?;
    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Get a user by email.
///
/// # Access Control
/// - `SelfOrAdmin` - Users can read their own account; admins can read any
#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Email belongs to another user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    principal: Principal,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::SelfOrAdmin(email.clone())])?;

    let user = UserService::new(&state.db).get_user(&email).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user account.
///
/// # Access Control
/// - `SelfOrAdmin` - Users can delete their own account; admins can delete any
#[utoipa::path(
    delete,
    path = "/users/delete/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "User email")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Email belongs to another user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    principal: Principal,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::SelfOrAdmin(email.clone())])?;

    UserService::new(&state.db).delete_user(&email).await?;

    Ok(StatusCode::NO_CONTENT)
}
