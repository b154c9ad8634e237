//! Session API endpoints. Reads are public; every mutation requires an
//! owner token.

use crate::auth::middleware::{AppState, OwnerUser};
use crate::error::AppError;
use crate::models::{CreateSessionRequest, Session, UpdateSessionRequest};
use crate::storage;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

/// GET /api/sessions — List all sessions (public)
pub async fn list_sessions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sessions = storage::session::list_sessions(&state.store).await?;
    Ok(Json(sessions))
}

/// POST /api/sessions — Create session (owner only)
pub async fn create_session(
    OwnerUser(user): OwnerUser,
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.title.is_empty() || req.time.is_empty() || req.date.is_empty() {
        return Err(AppError::BadRequest(
            "Title, time, and date are required".to_string(),
        ));
    }

    let now = Utc::now();
    let session = Session {
        id: Uuid::new_v4().to_string(),
        title: req.title,
        description: req.description,
        time: req.time,
        date: req.date,
        presenter: req.presenter,
        created_by: user.username,
        created_at: now,
        updated_at: now,
    };

    let created = storage::session::insert_session(&state.store, session).await?;

    tracing::info!(action = "session_created", session_id = %created.id, title = %created.title, "Session created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/sessions/{id} — Update session (owner only)
pub async fn update_session(
    OwnerUser(_user): OwnerUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = storage::session::update_session(&state.store, &id, &req)
        .await?
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

    tracing::info!(action = "session_updated", session_id = %updated.id, "Session updated");

    Ok(Json(updated))
}

/// DELETE /api/sessions/{id} — Delete session (owner only)
pub async fn delete_session(
    OwnerUser(_user): OwnerUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = storage::session::delete_session(&state.store, &id).await?;

    if !deleted {
        return Err(AppError::NotFound("Session not found".to_string()));
    }

    tracing::info!(action = "session_deleted", session_id = %id, "Session deleted");

    Ok(Json(json!({
        "message": "Session deleted successfully"
    })))
}
