use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{auth::Principal, role::ROLE_ADMIN},
    service::auth::token::verify_token,
    state::AppState,
};

pub enum Permission {
    /// Principal holds the `ADMIN` role.
    Admin,
    /// Principal is the user with this email, or holds the `ADMIN` role.
    SelfOrAdmin(String),
}

pub struct AuthGuard<'a> {
    principal: &'a Principal,
}

impl<'a> AuthGuard<'a> {
    pub fn new(principal: &'a Principal) -> Self {
        Self { principal }
    }

    /// Checks every permission against the request's principal.
    ///
    /// # Returns
    /// - `Ok(&Principal)` - All permissions satisfied
    /// - `Err(AuthError::AccessDenied)` - The first permission that failed
    pub fn require(&self, permissions: &[Permission]) -> Result<&'a Principal, AuthError> {
        for permission in permissions {
            match permission {
                Permission::Admin => require_role(self.principal, ROLE_ADMIN)?,
                Permission::SelfOrAdmin(email) => {
                    if &self.principal.email != email && !self.principal.is_admin() {
                        return Err(AuthError::AccessDenied(
                            self.principal.id,
                            format!("User attempted to access resources belonging to {}", email),
                        ));
                    }
                }
            }
        }

        Ok(self.principal)
    }
}

/// Fails unless the principal holds the named role.
pub fn require_role(principal: &Principal, role: &str) -> Result<(), AuthError> {
    if principal.has_role(role) {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        principal.id,
        format!("User attempted an operation requiring the {} role", role),
    ))
}

/// Authenticates a request from its `Authorization: Bearer` header.
///
/// Handlers that take a `Principal` argument reject unauthenticated requests
/// with 401 before the handler body runs.
impl FromRequestParts<AppState> for Principal {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AuthError::MissingToken)?;

        let principal = verify_token(&state.token_keys, bearer.token())?;

        Ok(principal)
    }
}
