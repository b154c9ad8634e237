//! Session collection operations.
//!
//! Every operation here is an independent read-modify-rewrite cycle over
//! `sessions.json`. List order is insertion order; updates never re-sort.

use super::{read_records, write_records, FileStore};
use crate::error::AppError;
use crate::models::{Session, UpdateSessionRequest};
use chrono::Utc;

/// List all sessions in insertion order.
///
/// An empty collection is a valid result, not an error.
pub async fn list_sessions(store: &FileStore) -> Result<Vec<Session>, AppError> {
    read_records(store.sessions_path()).await
}

/// Append a new session and rewrite the collection.
///
/// The caller assigns the id and timestamps; this function only persists.
pub async fn insert_session(store: &FileStore, session: Session) -> Result<Session, AppError> {
    let mut sessions: Vec<Session> = read_records(store.sessions_path()).await?;
    sessions.push(session.clone());
    write_records(store.sessions_path(), &sessions).await?;
    Ok(session)
}

/// Apply a partial update to the session with the given id.
///
/// Returns `None` when no session has that id. Merge semantics mirror the
/// update form the frontend sends: `title`/`time`/`date` are replaced only
/// when provided and non-empty (an explicit empty string leaves the stored
/// value alone), while `description`/`presenter` are replaced whenever
/// provided, empty string included. `updatedAt` is always refreshed.
pub async fn update_session(
    store: &FileStore,
    id: &str,
    changes: &UpdateSessionRequest,
) -> Result<Option<Session>, AppError> {
    let mut sessions: Vec<Session> = read_records(store.sessions_path()).await?;

    let Some(session) = sessions.iter_mut().find(|s| s.id == id) else {
        return Ok(None);
    };

    if let Some(title) = &changes.title {
        if !title.is_empty() {
            session.title = title.clone();
        }
    }
    if let Some(time) = &changes.time {
        if !time.is_empty() {
            session.time = time.clone();
        }
    }
    if let Some(date) = &changes.date {
        if !date.is_empty() {
            session.date = date.clone();
        }
    }
    if let Some(description) = &changes.description {
        session.description = description.clone();
    }
    if let Some(presenter) = &changes.presenter {
        session.presenter = presenter.clone();
    }
    session.updated_at = Utc::now();

    let updated = session.clone();
    write_records(store.sessions_path(), &sessions).await?;
    Ok(Some(updated))
}

/// Remove the session with the given id and rewrite the collection.
///
/// Returns `false` when no session has that id.
pub async fn delete_session(store: &FileStore, id: &str) -> Result<bool, AppError> {
    let mut sessions: Vec<Session> = read_records(store.sessions_path()).await?;

    let before = sessions.len();
    sessions.retain(|s| s.id != id);
    if sessions.len() == before {
        return Ok(false);
    }

    write_records(store.sessions_path(), &sessions).await?;
    Ok(true)
}
