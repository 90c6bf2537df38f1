//! Role factory for creating roles and user-role assignments.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Creates a role with the given name.
///
/// # Returns
/// - `Ok(entity::role::Model)` - Created role
/// - `Err(DbErr)` - Database error (e.g. the name already exists)
pub async fn create_role(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Returns the role with the given name, creating it first if needed.
pub async fn find_or_create_role(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::role::Model, DbErr> {
    let existing = entity::prelude::Role::find()
        .filter(entity::role::Column::Name.eq(name))
        .one(db)
        .await?;

    match existing {
        Some(role) => Ok(role),
        None => create_role(db, name).await,
    }
}

/// Grants a role to a user.
pub async fn assign_role(
    db: &DatabaseConnection,
    user_id: i32,
    role_id: i32,
) -> Result<entity::user_role::Model, DbErr> {
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        role_id: ActiveValue::Set(role_id),
    }
    .insert(db)
    .await
}
