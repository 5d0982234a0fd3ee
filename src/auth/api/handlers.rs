//! Request handlers (thin: parse, delegate, shape the response)

use axum::extract::{Json, State};
use std::sync::Arc;
use tracing::debug;

use super::extract::AuthBody;
use crate::auth::{errors::AuthError, types::*, AuthService};

/// POST /register
pub async fn register(
    State(service): State<Arc<AuthService>>,
    AuthBody(req): AuthBody<RegisterRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    debug!("API: registration request");
    let outcome = service.register(req).await?;
    Ok(Json(AuthResponse::new("User created", outcome)))
}

/// POST /login
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AuthBody(req): AuthBody<LoginRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    debug!("API: login request");
    let outcome = service.login(req).await?;
    Ok(Json(AuthResponse::new("Login successful", outcome)))
}

/// GET /users
pub async fn list_users(State(service): State<Arc<AuthService>>) -> Json<Vec<PublicUser>> {
    Json(service.list_users().await)
}
