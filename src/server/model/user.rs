//! User domain models and parameters.
//!
//! Provides the registered user account with its role names, and the parameters
//! used when creating an account.

use crate::model::user::UserDto;

/// Registered user with the names of the roles they hold.
///
/// The password hash never leaves the data layer except through
/// `UserCredentials`, which is used only for login.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl User {
    /// Converts an entity model and its role names to a user domain model.
    ///
    /// # Arguments
    /// - `entity` - The user entity model from the database
    /// - `roles` - Names of the roles assigned to the user
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model, roles: Vec<String>) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            roles,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            roles: self.roles,
        }
    }
}

/// Stored login credentials for a user.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password,
        }
    }
}

/// Parameters for creating a user account.
///
/// `password_hash` must already be hashed; repositories never see plain passwords.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}
