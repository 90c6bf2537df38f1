use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no bearer token.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token failed signature, format or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Token is expired or invalid: {0}")]
    InvalidToken(String),

    /// Email/password pair did not match a registered account.
    ///
    /// Results in a 401 Unauthorized response. The message does not reveal whether
    /// the email exists.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks a required role or ownership.
    ///
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Description of the denied operation, for server-side logs
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// An account already exists for this email.
    ///
    /// Results in a 409 Conflict response.
    #[error("User with email {0} already exists")]
    DuplicateRegistration(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden with a generic message
/// - `DuplicateRegistration` → 409 Conflict
///
/// Denials are logged at warn level with the detailed reason while the client
/// only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Authentication is required to access this resource".to_string(),
            ),
            Self::InvalidToken(reason) => {
                tracing::debug!("Rejected token: {}", reason);
                (
                    StatusCode::UNAUTHORIZED,
                    "Token is expired or invalid".to_string(),
                )
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::AccessDenied(user_id, reason) => {
                tracing::warn!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action".to_string(),
                )
            }
            Self::DuplicateRegistration(_) => (StatusCode::CONFLICT, self.to_string()),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
