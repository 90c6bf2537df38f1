//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts. Users are
//! returned with the names of their roles, which are loaded from the `user_role`
//! link table alongside the user row.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::user::{CreateUserParam, User, UserCredentials};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, and deleting user records.
pub struct UserRepository<'a, C = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user with no roles.
    ///
    /// # Arguments
    /// - `param` - Names, email and pre-hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with an empty role list
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity, Vec::new()))
    }

    /// Finds a user by ID with their role names.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let roles = self.get_role_names(entity.id).await?;

        Ok(Some(User::from_entity(entity, roles)))
    }

    /// Finds a user by email with their role names.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let roles = self.get_role_names(entity.id).await?;

        Ok(Some(User::from_entity(entity, roles)))
    }

    /// Finds the stored credentials for a login attempt.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all users with their role names, ordered by ID.
    ///
    /// Role names are loaded with a single query over the link table.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = entities.iter().map(|u| u.id).collect();
        let mut roles_by_user: HashMap<i32, Vec<String>> = HashMap::new();

        if !user_ids.is_empty() {
            let links = entity::prelude::UserRole::find()
                .filter(entity::user_role::Column::UserId.is_in(user_ids))
                .find_also_related(entity::prelude::Role)
                .order_by_asc(entity::role::Column::Name)
                .all(self.db)
                .await?;

            for (link, role) in links {
                if let Some(role) = role {
                    roles_by_user.entry(link.user_id).or_default().push(role.name);
                }
            }
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let roles = roles_by_user.remove(&entity.id).unwrap_or_default();
                User::from_entity(entity, roles)
            })
            .collect())
    }

    /// Deletes a user by ID.
    ///
    /// Role assignments are removed by the link table's cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of users deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Gets the names of a user's roles, sorted alphabetically.
    async fn get_role_names(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::Role::find()
            .select_only()
            .column(entity::role::Column::Name)
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::role::Relation::UserRole.def(),
            )
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .order_by_asc(entity::role::Column::Name)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
