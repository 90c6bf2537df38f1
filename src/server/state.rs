//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token keys for signing and verifying bearer tokens
//! - The bcrypt cost used for new password hashes
//! - The per-room lock registry used by booking creation

use sea_orm::DatabaseConnection;

use crate::server::service::{auth::token::TokenKeys, booking::lock::RoomLocks};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenKeys` holds the derived HMAC keys
/// - `RoomLocks` uses an `Arc` internally so every clone shares the same locks
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Keys for issuing and verifying bearer tokens, loaded once at startup.
    pub token_keys: TokenKeys,

    /// bcrypt cost factor for hashing new passwords.
    pub bcrypt_cost: u32,

    /// Per-room locks serializing booking creation and room deletion.
    pub room_locks: RoomLocks,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_keys` - Token signing and verification keys
    /// - `bcrypt_cost` - bcrypt cost factor
    ///
    /// # Returns
    /// - `AppState` - Initialized application state with an empty lock registry
    pub fn new(db: DatabaseConnection, token_keys: TokenKeys, bcrypt_cost: u32) -> Self {
        Self {
            db,
            token_keys,
            bcrypt_cost,
            room_locks: RoomLocks::new(),
        }
    }
}
