use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::api::{external_data::ExternalData, server::AppState};

/// GET /external-data
pub async fn external_data(State(state): State<Arc<AppState>>) -> Json<ExternalData> {
    Json(state.external.fetch().await)
}
