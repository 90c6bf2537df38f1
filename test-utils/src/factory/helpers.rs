//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a room together with one booking on it.
///
/// Both entities use factory defaults. Use the individual factories if you
/// need to customize dates or guest details.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((room, booking))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_booking(
    db: &DatabaseConnection,
) -> Result<(entity::room::Model, entity::booking::Model), DbErr> {
    let room = crate::factory::room::create_room(db).await?;
    let booking = crate::factory::booking::create_booking(db, room.id).await?;

    Ok((room, booking))
}

/// Creates a user holding the role with the given name.
///
/// The role is created if it does not exist yet.
///
/// # Arguments
/// - `db` - Database connection
/// - `role_name` - Name of the role to grant (e.g. `"ADMIN"`)
///
/// # Returns
/// - `Ok((user, role))` - The created user and the granted role
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role_name: &str,
) -> Result<(entity::user::Model, entity::role::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let role = crate::factory::role::find_or_create_role(db, role_name).await?;
    crate::factory::role::assign_role(db, user.id, role.id).await?;

    Ok((user, role))
}
