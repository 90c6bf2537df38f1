use axum::{extract::FromRequestParts, http::Request};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{require_role, AuthGuard, Permission},
    model::auth::Principal,
    service::auth::token::{issue_token, TokenKeys},
    state::AppState,
};
use test_utils::builder::TestBuilder;

mod extractor;
mod guard;

fn admin() -> Principal {
    Principal {
        id: 1,
        email: "admin@hotel.test".to_string(),
        roles: vec!["ADMIN".to_string(), "USER".to_string()],
    }
}

fn guest() -> Principal {
    Principal {
        id: 2,
        email: "guest@hotel.test".to_string(),
        roles: vec!["USER".to_string()],
    }
}
