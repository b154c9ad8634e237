//! Axum extractors for authentication and authorization.

use crate::config::Config;
use crate::error::AppError;
use crate::models::Role;
use crate::storage::FileStore;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: FileStore,
    pub config: Arc<Config>,
}

/// Authenticated caller extractor.
///
/// Extracts identity claims from `Authorization: Bearer {token}`.
/// Returns 401 Unauthorized if the header is missing or the token fails
/// signature or expiry verification. Verification is stateless: no user
/// store lookup happens on protected requests.
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Access token required".to_string()))?;

        // Parse Bearer token
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Invalid authorization format".to_string()))?;

        // Verify signature and expiry, then attach the embedded identity
        let claims = crate::auth::token::decode_token(token, &state.config)?;

        Ok(AuthUser {
            id: claims.sub,
            username: claims.username,
            role: claims.role,
        })
    }
}

/// Owner-only extractor.
///
/// Extracts the authenticated caller and verifies the role is Owner.
/// Returns 403 Forbidden otherwise.
pub struct OwnerUser(pub AuthUser);

impl FromRequestParts<AppState> for OwnerUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // First authenticate
        let user = AuthUser::from_request_parts(parts, state).await?;

        // Then authorize
        if user.role != Role::Owner {
            return Err(AppError::Forbidden("Owner access required".to_string()));
        }

        Ok(OwnerUser(user))
    }
}
