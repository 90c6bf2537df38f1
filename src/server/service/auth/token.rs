//! Bearer token issue and verification.
//!
//! Tokens are HS256 JWTs carrying the principal's ID, email and role names. The
//! signing key is loaded once at startup into `TokenKeys` and carried in application
//! state.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{error::auth::AuthError, model::auth::Principal};

/// Signing and verification keys with the lifetime of issued tokens.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiration: Duration,
}

impl TokenKeys {
    /// Builds keys from a shared secret.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret used to sign and verify tokens
    /// - `expiration_seconds` - Lifetime of issued tokens
    pub fn new(secret: &[u8], expiration_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            expiration: Duration::seconds(expiration_seconds),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    user_id: i32,
    roles: Vec<String>,
    iat: i64,
    exp: i64,
}

/// Issues a signed token for a principal.
///
/// # Returns
/// - `Ok(String)` - Encoded JWT
/// - `Err(jsonwebtoken::errors::Error)` - Encoding failed
pub fn issue_token(
    keys: &TokenKeys,
    principal: &Principal,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: principal.email.clone(),
        user_id: principal.id,
        roles: principal.roles.clone(),
        iat: now.timestamp(),
        exp: (now + keys.expiration).timestamp(),
    };

    encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
}

/// Verifies a token and recovers the principal it was issued for.
///
/// # Returns
/// - `Ok(Principal)` - Signature valid and token not expired
/// - `Err(AuthError::InvalidToken)` - Malformed, tampered, expired or signed with another key
pub fn verify_token(keys: &TokenKeys, token: &str) -> Result<Principal, AuthError> {
    let data = decode::<Claims>(token, &keys.decoding, &Validation::new(Algorithm::HS256))
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    Ok(Principal {
        id: data.claims.user_id,
        email: data.claims.sub,
        roles: data.claims.roles,
    })
}
