use axum::response::Html;
use chrono::Local;
use tracing::info;
use uuid::Uuid;

use crate::api::manifest;

/// GET /
pub async fn home() -> Html<String> {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let session_id = Uuid::new_v4();

    info!("Home page accessed at {}", now);

    Html(render_home(&now, session_id, manifest::dependency_count()))
}

fn render_home(now: &str, session_id: Uuid, dependency_count: usize) -> String {
    format!(
        "<h1>Outdated Dependencies App</h1>\
         <p>Current time: {now}</p>\
         <p>Session ID: {session_id}</p>\
         <p>This app uses {dependency_count} outdated dependencies!</p>"
    )
}
