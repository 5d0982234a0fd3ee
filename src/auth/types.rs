//! Auth module type definitions

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored user record.
///
/// Only the store holds these; everything leaving the service goes through
/// [`UserRecord::to_public`] so the digest never escapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Subject identifier referenced by issued tokens
    pub id: Uuid,
    /// Email as submitted at registration
    pub email: String,
    /// bcrypt digest of the password
    pub password_hash: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Build a fresh record with a new v4 id stamped with the current time.
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }

    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            created: self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// User information as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    /// RFC 3339 creation time, millisecond precision
    pub created: String,
}

/// Registration request
///
/// A missing email reads as `""` and fails validation. A missing password
/// stays `None`; only an explicit `""` is hashed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

/// Result of a successful register or login call.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub token: String,
    pub user: PublicUser,
}

/// Authentication response body
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    pub token: String,
    pub user: PublicUser,
}

impl AuthResponse {
    pub fn new(message: &'static str, outcome: AuthOutcome) -> Self {
        Self {
            message,
            token: outcome.token,
            user: outcome.user,
        }
    }
}
