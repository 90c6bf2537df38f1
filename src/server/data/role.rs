//! Role data repository for database operations.
//!
//! This module provides the `RoleRepository` for managing roles and the `user_role`
//! link table that assigns them to users.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::role::{Role, ROLE_ADMIN};

/// Repository providing database operations for roles and role assignments.
pub struct RoleRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new RoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RoleRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all roles ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Role>, DbErr> {
        let entities = entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Role::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Role::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Role::from_entity))
    }

    /// Inserts a new role.
    ///
    /// # Returns
    /// - `Ok(Role)` - The created role
    /// - `Err(DbErr)` - Database error, including a unique violation on name
    pub async fn create(&self, name: &str) -> Result<Role, DbErr> {
        let entity = entity::role::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Role::from_entity(entity))
    }

    /// Returns the named role, creating it if it does not exist yet.
    ///
    /// Used at startup to seed the built-in roles and when registering users.
    pub async fn get_or_create(&self, name: &str) -> Result<Role, DbErr> {
        if let Some(role) = self.find_by_name(name).await? {
            return Ok(role);
        }

        self.create(name).await
    }

    /// Deletes a role by ID.
    ///
    /// Assignments of the role are removed by the link table's cascading foreign key.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Role::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Assigns a role to a user.
    ///
    /// # Returns
    /// - `Ok(())` - Assignment created
    /// - `Err(DbErr)` - Database error, including a primary key violation when the
    ///   user already holds the role
    pub async fn assign(&self, user_id: i32, role_id: i32) -> Result<(), DbErr> {
        entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a role from a user.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of assignments removed (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove(&self, user_id: i32, role_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::user_role::Column::RoleId.eq(role_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes a role from every user that holds it.
    pub async fn remove_all_from_role(&self, role_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::RoleId.eq(role_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn user_has_role(&self, user_id: i32, role_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::user_role::Column::RoleId.eq(role_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if any user holds the admin role.
    ///
    /// Used during startup to decide whether a bootstrap admin should be created.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::UserRole::find()
            .inner_join(entity::prelude::Role)
            .filter(entity::role::Column::Name.eq(ROLE_ADMIN))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
