//! Auth error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Auth error
///
/// Every variant is terminal for the request and maps to one fixed status
/// and one fixed message. Details carried by a variant are logged, never
/// returned to the client.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password hashing failed: {0}")]
    HashingError(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    TokenInvalid,

    #[error("Token signing failed: {0}")]
    TokenError(String),
}

impl AuthError {
    /// HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidEmail => StatusCode::BAD_REQUEST,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials | Self::TokenInvalid => StatusCode::UNAUTHORIZED,
            Self::HashingError(_) | Self::TokenError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "Invalid email",
            Self::HashingError(_) => "Hash error",
            Self::UserNotFound => "User not found",
            Self::InvalidCredentials => "Invalid password",
            Self::TokenInvalid => "Invalid token",
            Self::TokenError(_) => "Token error",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AuthError::InvalidEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::HashingError("rng".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AuthError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::TokenInvalid.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(AuthError::InvalidEmail.user_message(), "Invalid email");
        assert_eq!(AuthError::HashingError("x".into()).user_message(), "Hash error");
        assert_eq!(AuthError::UserNotFound.user_message(), "User not found");
        assert_eq!(AuthError::InvalidCredentials.user_message(), "Invalid password");
    }

    #[tokio::test]
    async fn test_response_body_hides_details() {
        let response = AuthError::HashingError("invalid cost 99".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Hash error" }));
    }
}
