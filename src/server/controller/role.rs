use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        role::{CreateRoleDto, RoleAssignmentQuery, RoleDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::auth::Principal,
        service::role::RoleService,
        state::AppState,
    },
};

/// Tag for grouping role endpoints in OpenAPI documentation
pub static ROLE_TAG: &str = "role";

/// List all roles.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
#[utoipa::path(
    get,
    path = "/roles/all-roles",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "All roles ordered by name", body = Vec<RoleDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_all_roles(
    State(state): State<AppState>,
    principal: Principal,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    let roles = RoleService::new(&state.db).get_roles().await?;
    let roles_dto: Vec<RoleDto> = roles.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(roles_dto)))
}

/// Create a role.
///
/// Role names are stored upper-cased.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
#[utoipa::path(
    post,
    path = "/roles/create-new-role",
    tag = ROLE_TAG,
    request_body = CreateRoleDto,
    responses(
        (status = 201, description = "Role created", body = RoleDto),
        (status = 400, description = "Role name is blank", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Role already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_role(
    State(state): State<AppState>,
    principal: Principal,
    Json(payload): Json<CreateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    let role = RoleService::new(&state.db).create_role(&payload.name).await?;

    Ok((StatusCode::CREATED, Json(role.into_dto())))
}

/// Delete a role and its assignments.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
#[utoipa::path(
    delete,
    path = "/roles/delete/{role_id}",
    tag = ROLE_TAG,
    params(
        ("role_id" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_role(
    State(state): State<AppState>,
    principal: Principal,
    Path(role_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    RoleService::new(&state.db).delete_role(role_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Revoke a role from every user holding it.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
#[utoipa::path(
    post,
    path = "/roles/remove-all-users-from-role/{role_id}",
    tag = ROLE_TAG,
    params(
        ("role_id" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role revoked from all users", body = RoleDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn remove_all_users_from_role(
    State(state): State<AppState>,
    principal: Principal,
    Path(role_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    let role = RoleService::new(&state.db)
        .remove_all_users_from_role(role_id)
        .await?;

    Ok((StatusCode::OK, Json(role.into_dto())))
}

/// Revoke a role from one user.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
#[utoipa::path(
    post,
    path = "/roles/remove-user-from-role",
    tag = ROLE_TAG,
    params(RoleAssignmentQuery),
    responses(
        (status = 200, description = "Role revoked", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User, role or assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn remove_user_from_role(
    State(state): State<AppState>,
    principal: Principal,
    Query(query): Query<RoleAssignmentQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    let user = RoleService::new(&state.db)
        .remove_user_from_role(query.user_id, query.role_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Grant a role to a user.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
#[utoipa::path(
    post,
    path = "/roles/assign-user-to-role",
    tag = ROLE_TAG,
    params(RoleAssignmentQuery),
    responses(
        (status = 200, description = "Role granted", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User or role not found", body = ErrorDto),
        (status = 409, description = "User already holds the role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn assign_user_to_role(
    State(state): State<AppState>,
    principal: Principal,
    Query(query): Query<RoleAssignmentQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&principal).require(&[Permission::Admin])?;

    let user = RoleService::new(&state.db)
        .assign_user_to_role(query.user_id, query.role_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
