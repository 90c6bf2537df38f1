//! Account registration and login.

pub mod password;
pub mod token;

use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        auth::{Principal, RegisterParam},
        role::ROLE_USER,
        user::{CreateUserParam, User},
    },
    service::auth::{
        password::{hash_password, verify_password},
        token::{issue_token, TokenKeys},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    token_keys: &'a TokenKeys,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `token_keys` - Keys used to sign issued tokens
    /// - `bcrypt_cost` - Cost factor for hashing new passwords
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, token_keys: &'a TokenKeys, bcrypt_cost: u32) -> Self {
        Self {
            db,
            token_keys,
            bcrypt_cost,
        }
    }

    /// Registers a new account with the `USER` role.
    ///
    /// The user row and its role assignment are written in one transaction.
    ///
    /// # Arguments
    /// - `param` - Names, email and plain password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its roles
    /// - `Err(AppError::BadRequest)` - A required field is blank
    /// - `Err(AppError::AuthErr(DuplicateRegistration))` - Email is already registered
    /// - `Err(AppError::HashErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        if param.email.trim().is_empty() || param.password.is_empty() {
            return Err(AppError::BadRequest(
                "Email and password are required".to_string(),
            ));
        }
        if param.first_name.trim().is_empty() || param.last_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "First and last name are required".to_string(),
            ));
        }

        if UserRepository::new(self.db)
            .exists_by_email(&param.email)
            .await?
        {
            return Err(AuthError::DuplicateRegistration(param.email).into());
        }

        let password_hash = hash_password(param.password, self.bcrypt_cost).await?;
        let email = param.email.clone();

        let txn = self.db.begin().await?;

        let mut user = match UserRepository::new(&txn)
            .create(CreateUserParam {
                first_name: param.first_name,
                last_name: param.last_name,
                email: param.email,
                password_hash,
            })
            .await
        {
            Ok(user) => user,
            // Lost a race with a concurrent registration for the same email
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(AuthError::DuplicateRegistration(email).into());
            }
            Err(err) => return Err(err.into()),
        };

        let role_repo = RoleRepository::new(&txn);
        let role = role_repo.get_or_create(ROLE_USER).await?;
        role_repo.assign(user.id, role.id).await?;

        txn.commit().await?;

        user.roles.push(role.name);

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Checks credentials and returns the matching principal.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(Principal)` - Credentials valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::HashErr)` - Stored hash is malformed
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Principal, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_email(email).await? else {
            tracing::warn!("Login attempt for unknown email {}", email);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password.to_string(), credentials.password_hash).await? {
            tracing::warn!("Failed login for user {}", credentials.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = user_repo
            .find_by_id(credentials.id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        Ok(Principal {
            id: user.id,
            email: user.email,
            roles: user.roles,
        })
    }

    /// Authenticates and issues a bearer token.
    ///
    /// # Returns
    /// - `Ok((Principal, String))` - The principal and its signed token
    /// - `Err(AppError)` - See `authenticate`, plus `TokenErr` if signing fails
    pub async fn login(&self, email: &str, password: &str) -> Result<(Principal, String), AppError> {
        let principal = self.authenticate(email, password).await?;
        let token = issue_token(self.token_keys, &principal)?;

        tracing::info!("User {} logged in", principal.id);

        Ok((principal, token))
    }
}
