//! Flat-file storage layer for sessions and users.
//!
//! Each collection lives in its own JSON file (`sessions.json`,
//! `users.json`) holding a single ordered array of records. Every mutation
//! reads the whole file, applies the change in memory, and rewrites the
//! file in full. There is no locking: concurrent writers race and the last
//! full rewrite wins. A parse failure on read surfaces as a 500 to the
//! caller; the file is never repaired automatically.

pub mod session;
pub mod user;

use crate::error::AppError;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

/// Handle to the on-disk record collections.
#[derive(Debug, Clone)]
pub struct FileStore {
    sessions_path: PathBuf,
    users_path: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: &Path) -> Self {
        FileStore {
            sessions_path: data_dir.join("sessions.json"),
            users_path: data_dir.join("users.json"),
        }
    }

    pub fn sessions_path(&self) -> &Path {
        &self.sessions_path
    }

    pub fn users_path(&self) -> &Path {
        &self.users_path
    }

    /// Ensure the data directory and both collection files exist.
    ///
    /// Missing files are seeded with an empty array. Existing files are
    /// left untouched.
    pub async fn init(&self) -> Result<(), AppError> {
        if let Some(dir) = self.sessions_path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        for path in [&self.sessions_path, &self.users_path] {
            if tokio::fs::try_exists(path).await? {
                continue;
            }
            tokio::fs::write(path, "[]").await?;
        }

        Ok(())
    }
}

/// Read and deserialize an entire record collection.
pub async fn read_records<T>(path: &Path) -> Result<Vec<T>, AppError>
where
    T: DeserializeOwned,
{
    let data = tokio::fs::read_to_string(path).await?;
    let records = serde_json::from_str(&data)?;
    Ok(records)
}

/// Serialize and rewrite an entire record collection.
///
/// Pretty-printed to keep the file hand-editable by an operator. The write
/// is not atomic: a failure mid-rewrite can leave the file truncated, which
/// subsequent reads report as a 500.
pub async fn write_records<T>(path: &Path, records: &[T]) -> Result<(), AppError>
where
    T: Serialize,
{
    let json = serde_json::to_string_pretty(records)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;

    #[tokio::test]
    async fn test_init_creates_empty_collections() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.init().await.unwrap();

        let sessions: Vec<Session> = read_records(store.sessions_path()).await.unwrap();
        assert!(sessions.is_empty());

        let users: Vec<crate::models::User> = read_records(store.users_path()).await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_init_preserves_existing_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.init().await.unwrap();

        tokio::fs::write(store.sessions_path(), r#"[{"id":"keep","title":"t","description":"","time":"09:00","date":"2024-01-04","presenter":"","createdBy":"owner","createdAt":"2024-01-04T09:00:00Z","updatedAt":"2024-01-04T09:00:00Z"}]"#)
            .await
            .unwrap();

        // Second init must not clobber the file back to []
        store.init().await.unwrap();

        let sessions: Vec<Session> = read_records(store.sessions_path()).await.unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, "keep");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.init().await.unwrap();

        tokio::fs::write(store.sessions_path(), "{ not json ]")
            .await
            .unwrap();

        let result: Result<Vec<Session>, _> = read_records(store.sessions_path()).await;
        assert!(matches!(result, Err(crate::error::AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_missing_file_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        // No init: reads against a missing file surface as storage errors.

        let result: Result<Vec<Session>, _> = read_records(store.sessions_path()).await;
        assert!(matches!(result, Err(crate::error::AppError::Internal(_))));
    }
}
