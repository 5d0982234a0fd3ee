use axum::{error_handling::HandleErrorLayer, http::StatusCode, routing::get, Router};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower::{timeout::TimeoutLayer, BoxError, ServiceBuilder};
use tower_http::{compression::CompressionLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::api::csp_middleware::security_headers;
use crate::api::external_data::ExternalDataClient;
use crate::api::handlers;
use crate::api::middleware::create_cors_layer;
use crate::api::server_config::*;
use crate::auth::{create_auth_routes, AuthService, MemoryStorage};
use crate::config::AppEnvConfig;

/// State shared by the non-auth routes
#[derive(Debug)]
pub struct AppState {
    pub started_at: Instant,
    pub external: ExternalDataClient,
}

impl AppState {
    pub fn new(github_repo_url: String) -> Result<Self, reqwest::Error> {
        Ok(Self {
            started_at: Instant::now(),
            external: ExternalDataClient::new(github_repo_url)?,
        })
    }
}

#[derive(Clone)]
pub struct AppServer {
    pub auth_service: Arc<AuthService>,
    pub state: Arc<AppState>,
    pub config: AppEnvConfig,
}

impl AppServer {
    /// Server backed by a fresh in-memory user store.
    pub fn new(config: AppEnvConfig) -> Result<Self, anyhow::Error> {
        let auth_service = Arc::new(AuthService::new(MemoryStorage::new(), &config.auth));
        let state = Arc::new(
            AppState::new(config.github_repo_url.clone())
                .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {}", e))?,
        );
        Ok(Self {
            auth_service,
            state,
            config,
        })
    }

    pub fn create_router(&self) -> Router {
        match self.config.cors_allow_origin.as_deref() {
            Some(origins) => tracing::info!("CORS configured to allow origin: {}", origins),
            None => tracing::info!("CORS configured to allow any origin"),
        }

        let base_router = Router::new()
            .route("/", get(handlers::home))
            .route("/info", get(handlers::system_info))
            .route("/external-data", get(handlers::external_data))
            .route("/health", get(handlers::health_check))
            .with_state(self.state.clone());

        base_router
            .merge(create_auth_routes(self.auth_service.clone()))
            .layer(axum::middleware::from_fn(security_headers))
            .layer(create_cors_layer(self.config.cors_allow_origin.as_deref()))
            .layer(CompressionLayer::new())
            .layer(
                ServiceBuilder::new()
                    // Convert middleware errors (timeout) into HTTP responses
                    .layer(HandleErrorLayer::new(|err: BoxError| async move {
                        if err.is::<tower::timeout::error::Elapsed>() {
                            (StatusCode::REQUEST_TIMEOUT, "request timed out")
                        } else {
                            (StatusCode::SERVICE_UNAVAILABLE, "service unavailable")
                        }
                    }))
                    .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
                    .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
                    .layer(TraceLayer::new_for_http()),
            )
    }

    pub async fn start(self) -> Result<(), anyhow::Error> {
        let app = self.create_router();
        let addr = self.config.bind_addr();
        tracing::info!("Server listening on {}", addr);
        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}
