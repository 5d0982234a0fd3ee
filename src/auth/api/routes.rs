//! Auth routes

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use crate::auth::AuthService;

/// Routes for registration, login and the user listing.
pub fn create_auth_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/users", get(handlers::list_users))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{config::PasswordConfig, AuthConfig, MemoryStorage};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let config = AuthConfig {
            password: PasswordConfig { bcrypt_cost: 4 },
            ..AuthConfig::ephemeral()
        };
        let service = Arc::new(AuthService::new(MemoryStorage::new(), &config));
        TestServer::new(create_auth_routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_register_route() {
        let server = server();

        let response = server
            .post("/register")
            .json(&json!({ "email": "test@example.com", "password": "password123" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "User created");
        assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
        assert_eq!(body["user"]["email"], "test@example.com");
        assert!(body["user"].get("password").is_none());
    }

    #[tokio::test]
    async fn test_missing_email_is_invalid_email() {
        let server = server();

        let response = server
            .post("/register")
            .json(&json!({ "password": "password123" }))
            .await;

        assert_eq!(response.status_code(), axum::http::StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Invalid email" }));
    }

    #[tokio::test]
    async fn test_register_and_login_with_form_body() {
        let server = server();

        let response = server
            .post("/register")
            .form(&[("email", "form@example.com"), ("password", "p1")])
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["user"]["email"], "form@example.com");

        let response = server
            .post("/login")
            .form(&[("email", "form@example.com"), ("password", "p1")])
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["message"], "Login successful");
    }

    #[tokio::test]
    async fn test_empty_body_is_invalid_email() {
        let server = server();

        let response = server.post("/register").await;

        assert_eq!(response.status_code(), axum::http::StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Invalid email" }));
        server.get("/users").await.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_missing_password_is_hash_error() {
        let server = server();

        let response = server
            .post("/register")
            .json(&json!({ "email": "a@x.com" }))
            .await;

        assert_eq!(
            response.status_code(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        response.assert_json(&json!({ "error": "Hash error" }));
        server.get("/users").await.assert_json(&json!([]));

        let login = server
            .post("/login")
            .json(&json!({ "email": "a@x.com", "password": "" }))
            .await;
        assert_eq!(login.status_code(), axum::http::StatusCode::NOT_FOUND);
    }
}
