//! Password hashing and verification with bcrypt.

use crate::error::AppError;

/// Fixed bcrypt cost factor. Matches the 10 rounds the stored hashes in
/// existing deployments were generated with.
const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password with a per-record random salt.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    bcrypt::hash(plain, BCRYPT_COST)
        .map_err(|e| AppError::Internal(format!("Password hash error: {}", e)))
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(false)` on mismatch. A malformed stored hash is a server
/// error, not an authentication failure.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, AppError> {
    bcrypt::verify(plain, hash)
        .map_err(|e| AppError::Internal(format!("Password verify error: {}", e)))
}
