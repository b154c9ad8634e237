//! API route handlers.

pub mod auth;
pub mod sessions;

use crate::auth::middleware::AppState;
use axum::{
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;

/// GET /api/health — Liveness probe
async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "message": "Session board API is running"
    }))
}

/// Build the API router with all endpoints.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Auth endpoints
        .route("/api/auth/login", post(auth::login))
        .route("/api/profile", get(auth::profile))
        // Session endpoints
        .route(
            "/api/sessions",
            get(sessions::list_sessions).post(sessions::create_session),
        )
        .route(
            "/api/sessions/{id}",
            put(sessions::update_session).delete(sessions::delete_session),
        )
        // Health check
        .route("/api/health", get(health))
}
