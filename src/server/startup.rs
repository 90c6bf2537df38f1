use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::{role::RoleRepository, user::UserRepository},
    error::AppError,
    model::{
        auth::RegisterParam,
        role::{ROLE_ADMIN, ROLE_USER},
    },
    service::auth::{token::TokenKeys, AuthService},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures the built-in `USER` and `ADMIN` roles exist.
pub async fn seed_roles(db: &DatabaseConnection) -> Result<(), AppError> {
    let role_repo = RoleRepository::new(db);

    for name in [ROLE_USER, ROLE_ADMIN] {
        role_repo.get_or_create(name).await?;
    }

    Ok(())
}

/// Creates the first admin account when none exists.
///
/// Uses the bootstrap credentials from configuration. Without them, logs a warning
/// and leaves the database unchanged. An existing account with the bootstrap email
/// is promoted instead of recreated.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Configuration holding the optional bootstrap credentials
/// - `token_keys` - Keys passed through to the auth service
pub async fn check_for_admin(
    db: &DatabaseConnection,
    config: &Config,
    token_keys: &TokenKeys,
) -> Result<(), AppError> {
    let role_repo = RoleRepository::new(db);
    if role_repo.admin_exists().await? {
        return Ok(());
    }

    let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) else {
        tracing::warn!(
            "No admin user exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one at startup"
        );
        return Ok(());
    };

    let user = match UserRepository::new(db).find_by_email(email).await? {
        Some(user) => user,
        None => {
            AuthService::new(db, token_keys, config.bcrypt_cost)
                .register(RegisterParam {
                    first_name: "Hotel".to_string(),
                    last_name: "Admin".to_string(),
                    email: email.clone(),
                    password: password.clone(),
                })
                .await?
        }
    };

    let admin_role = role_repo.get_or_create(ROLE_ADMIN).await?;
    role_repo.assign(user.id, admin_role.id).await?;

    tracing::info!("Created admin account {}", user.email);

    Ok(())
}
