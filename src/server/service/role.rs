//! Role service for business logic.
//!
//! This module provides the `RoleService` for creating roles and managing which users
//! hold them.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    error::AppError,
    model::{role::Role, user::User},
};

/// Service providing business logic for roles and role assignments.
pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_roles(&self) -> Result<Vec<Role>, AppError> {
        Ok(RoleRepository::new(self.db).get_all().await?)
    }

    /// Creates a role. Names are stored upper-cased.
    ///
    /// # Returns
    /// - `Ok(Role)` - The created role
    /// - `Err(AppError::BadRequest)` - Name is blank
    /// - `Err(AppError::Conflict)` - A role with that name exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_role(&self, name: &str) -> Result<Role, AppError> {
        let name = name.trim().to_uppercase();
        if name.is_empty() {
            return Err(AppError::BadRequest("Role name must not be blank".to_string()));
        }

        let role_repo = RoleRepository::new(self.db);
        if role_repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::Conflict(format!("Role {} already exists", name)));
        }

        let role = role_repo.create(&name).await?;

        tracing::info!("Created role {}", role.name);

        Ok(role)
    }

    /// Deletes a role and all of its assignments.
    ///
    /// # Returns
    /// - `Ok(())` - Role deleted
    /// - `Err(AppError::NotFound)` - No role with that ID
    pub async fn delete_role(&self, role_id: i32) -> Result<(), AppError> {
        let rows = RoleRepository::new(self.db).delete(role_id).await?;
        if rows == 0 {
            return Err(role_not_found(role_id));
        }

        tracing::info!("Deleted role {}", role_id);

        Ok(())
    }

    /// Grants a role to a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with updated roles
    /// - `Err(AppError::NotFound)` - User or role does not exist
    /// - `Err(AppError::Conflict)` - User already holds the role
    pub async fn assign_user_to_role(&self, user_id: i32, role_id: i32) -> Result<User, AppError> {
        let (user, role) = self.find_user_and_role(user_id, role_id).await?;

        let role_repo = RoleRepository::new(self.db);
        if role_repo.user_has_role(user.id, role.id).await? {
            return Err(AppError::Conflict(format!(
                "{} is already assigned the {} role",
                user.email, role.name
            )));
        }

        role_repo.assign(user.id, role.id).await?;

        tracing::info!("Assigned role {} to user {}", role.name, user.id);

        self.reload_user(user.id).await
    }

    /// Revokes a role from a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The user with updated roles
    /// - `Err(AppError::NotFound)` - User or role does not exist, or the user does not
    ///   hold the role
    pub async fn remove_user_from_role(
        &self,
        user_id: i32,
        role_id: i32,
    ) -> Result<User, AppError> {
        let (user, role) = self.find_user_and_role(user_id, role_id).await?;

        let rows = RoleRepository::new(self.db).remove(user.id, role.id).await?;
        if rows == 0 {
            return Err(AppError::NotFound(format!(
                "{} does not hold the {} role",
                user.email, role.name
            )));
        }

        tracing::info!("Removed role {} from user {}", role.name, user.id);

        self.reload_user(user.id).await
    }

    /// Revokes a role from every user holding it.
    ///
    /// # Returns
    /// - `Ok(Role)` - The role, now with no holders
    /// - `Err(AppError::NotFound)` - No role with that ID
    pub async fn remove_all_users_from_role(&self, role_id: i32) -> Result<Role, AppError> {
        let role_repo = RoleRepository::new(self.db);

        let role = role_repo
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| role_not_found(role_id))?;

        let rows = role_repo.remove_all_from_role(role.id).await?;

        tracing::info!("Removed role {} from {} user(s)", role.name, rows);

        Ok(role)
    }

    async fn find_user_and_role(&self, user_id: i32, role_id: i32) -> Result<(User, Role), AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let role = RoleRepository::new(self.db)
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| role_not_found(role_id))?;

        Ok((user, role))
    }

    async fn reload_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }
}

fn role_not_found(role_id: i32) -> AppError {
    AppError::NotFound(format!("Role {} not found", role_id))
}
