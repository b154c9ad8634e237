//! Auth API endpoints.

use crate::auth::middleware::{AppState, AuthUser};
use crate::auth::{password, token};
use crate::error::AppError;
use crate::models::{LoginRequest, LoginResponse, PublicUser};
use crate::storage;
use axum::{extract::State, response::IntoResponse, Json};

/// POST /api/auth/login — Verify credentials and mint a token
///
/// Unknown username and wrong password produce the same response so the
/// two cases cannot be told apart from the outside.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Username and password required".to_string(),
        ));
    }

    let Some(user) = storage::user::find_by_username(&state.store, &req.username).await? else {
        tracing::warn!(action = "login_failed", username = %req.username, "Unknown username");
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    };

    if !password::verify_password(&req.password, &user.password_hash)? {
        tracing::warn!(action = "login_failed", username = %req.username, "Wrong password");
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = token::issue_token(&user, &state.config)?;

    tracing::info!(action = "login_success", user_id = %user.id, username = %user.username, role = %user.role, "User logged in");

    Ok(Json(LoginResponse {
        token,
        user: user.public(),
    }))
}

/// GET /api/profile — Identity of the authenticated caller
///
/// Echoes the claims attached by the auth extractor; any valid token
/// qualifies, owner or not.
pub async fn profile(user: AuthUser) -> Result<impl IntoResponse, AppError> {
    Ok(Json(PublicUser {
        id: user.id,
        username: user.username,
        role: user.role,
    }))
}
