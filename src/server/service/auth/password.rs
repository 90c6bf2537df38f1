//! Password hashing with bcrypt.
//!
//! Hashing is CPU bound, so both operations run on the blocking thread pool.

use crate::server::error::AppError;

/// Lowest cost bcrypt accepts (mirrors bcrypt's private `MIN_COST`); used by tests.
#[cfg(test)]
pub const MIN_COST: u32 = 4;

/// Hashes a plain password.
///
/// # Arguments
/// - `password` - Plain password
/// - `cost` - bcrypt cost factor
///
/// # Returns
/// - `Ok(String)` - bcrypt hash
/// - `Err(AppError::HashErr)` - Hashing failed
/// - `Err(AppError::InternalError)` - Blocking task panicked or was cancelled
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))??;

    Ok(hash)
}

/// Checks a plain password against a stored bcrypt hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::HashErr)` - Stored hash is malformed
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| {
            AppError::InternalError(format!("Password verification task failed: {}", e))
        })??;

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn verifies_matching_password() -> Result<(), AppError> {
        let hash = hash_password("s3cret!".to_string(), crate::server::service::auth::password::MIN_COST).await?;

        assert_ne!(hash, "s3cret!");
        assert!(verify_password("s3cret!".to_string(), hash).await?);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_wrong_password() -> Result<(), AppError> {
        let hash = hash_password("s3cret!".to_string(), crate::server::service::auth::password::MIN_COST).await?;

        assert!(!verify_password("guess".to_string(), hash).await?);

        Ok(())
    }
}
