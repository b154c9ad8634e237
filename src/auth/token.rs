//! Signed token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with the process-wide secret from
//! configuration. The embedded claims carry the caller's identity and
//! role so protected requests need no user-store lookup.

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Role, User};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Identity claims embedded in every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: String,
    pub username: String,
    pub role: Role,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Mint a signed token for an authenticated user.
///
/// Lifetime is fixed at `config.token_ttl_secs` from issuance.
pub fn issue_token(user: &User, config: &Config) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user.id.clone(),
        username: user.username.clone(),
        role: user.role,
        iat: now,
        exp: now + config.token_ttl_secs as i64,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token encode error: {}", e)))
}

/// Verify a token's signature and expiry and return its claims.
///
/// Expired and otherwise-invalid tokens both fail authentication; only
/// the message differs.
pub fn decode_token(token: &str, config: &Config) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::Unauthorized("Token expired".to_string())
        }
        _ => AppError::Unauthorized("Invalid token".to_string()),
    })
}
