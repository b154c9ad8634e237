//! Request, response, and storage models for the API.
//!
//! All models use serde. Wire field names are camelCase to match the
//! JSON the frontend consumes. Storage models are the records persisted
//! to the flat JSON files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Session Models
// ============================================================================

/// A scheduled session as stored in `sessions.json` and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    pub description: String,
    /// String-encoded HH:MM.
    pub time: String,
    /// String-encoded calendar date.
    pub date: String,
    pub presenter: String,
    /// Username snapshot of the owner who created the record.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for POST /api/sessions.
///
/// All fields default to empty so a missing field and an explicit empty
/// string validate the same way (title/time/date must be non-empty).
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub presenter: String,
}

/// Body for PUT /api/sessions/{id}. Every field is optional.
///
/// `title`/`time`/`date` only replace the stored value when non-empty;
/// `description`/`presenter` replace whenever present, empty included.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSessionRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub time: Option<String>,
    pub date: Option<String>,
    pub presenter: Option<String>,
}

// ============================================================================
// Auth Models
// ============================================================================

/// Body for POST /api/auth/login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Response after a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Public-safe user projection (never includes the password hash).
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub role: Role,
}

// ============================================================================
// Storage Models
// ============================================================================

/// User record as stored in `users.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Project to the public-safe shape returned by the API.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            username: self.username.clone(),
            role: self.role,
        }
    }
}

// ============================================================================
// User Roles
// ============================================================================

/// User role types. A closed enumeration so a typo'd role in the users
/// file fails loudly instead of silently failing authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Reader,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Reader => "reader",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Role::Owner),
            "reader" => Ok(Role::Reader),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}
