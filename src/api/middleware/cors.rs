//! CORS layer configuration

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::api::server_config::CORS_MAX_AGE;

/// Build the CORS layer.
///
/// `None` allows any origin. Otherwise `cors_origin` is a comma separated
/// allow list; entries that are not valid header values are skipped.
pub fn create_cors_layer(cors_origin: Option<&str>) -> CorsLayer {
    let allow_origin = match cors_origin {
        None => AllowOrigin::any(),
        Some(origins) => AllowOrigin::list(
            origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|s| match HeaderValue::from_str(s) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = s, "ignoring invalid CORS origin");
                        None
                    }
                }),
        ),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
        ])
        .max_age(CORS_MAX_AGE)
}
