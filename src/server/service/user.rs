//! User service for business logic.
//!
//! This module provides the `UserService` for account lookups and deletion. Access
//! control is applied by the controllers before these methods are called.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users with their roles.
    pub async fn get_users(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Retrieves a user by email.
    ///
    /// # Returns
    /// - `Ok(User)` - User found with roles
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", email)))
    }

    /// Deletes a user by email.
    ///
    /// Bookings made under the user's email are kept.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_user(&self, email: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", email)))?;

        user_repo.delete(user.id).await?;

        tracing::info!("Deleted user {}", user.id);

        Ok(())
    }
}
