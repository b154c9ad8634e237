//! User collection operations and first-run seeding.
//!
//! Users live in `users.json` as a flat array. The API surface never
//! mutates or deletes user records; the only write path is the first-run
//! seeding of the default owner account.

use super::{read_records, write_records, FileStore};
use crate::auth::password::hash_password;
use crate::error::AppError;
use crate::models::{Role, User};
use chrono::Utc;
use uuid::Uuid;

/// Fixed default credentials seeded on first run. A documented weak
/// default that must be rotated in any real deployment.
pub const DEFAULT_OWNER_USERNAME: &str = "owner";
pub const DEFAULT_OWNER_PASSWORD: &str = "admin123";

/// Load the full user collection.
pub async fn load_users(store: &FileStore) -> Result<Vec<User>, AppError> {
    read_records(store.users_path()).await
}

/// Look up a user by username (case-sensitive).
pub async fn find_by_username(
    store: &FileStore,
    username: &str,
) -> Result<Option<User>, AppError> {
    let users = load_users(store).await?;
    Ok(users.into_iter().find(|u| u.username == username))
}

/// Seed the default owner account when the user collection is empty.
///
/// Returns `true` when a record was created, so the caller can surface the
/// default credentials to the operator exactly once.
pub async fn seed_default_owner(store: &FileStore) -> Result<bool, AppError> {
    let mut users = load_users(store).await?;
    if !users.is_empty() {
        return Ok(false);
    }

    let owner = User {
        id: Uuid::new_v4().to_string(),
        username: DEFAULT_OWNER_USERNAME.to_string(),
        password_hash: hash_password(DEFAULT_OWNER_PASSWORD)?,
        role: Role::Owner,
        created_at: Utc::now(),
    };

    users.push(owner);
    write_records(store.users_path(), &users).await?;
    Ok(true)
}
