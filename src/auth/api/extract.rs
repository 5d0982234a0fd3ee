//! Request body extractor for the auth routes

use axum::{
    async_trait,
    body::{self, Body},
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::api::server_config::MAX_BODY_SIZE;

/// Auth request body, read as JSON or as an urlencoded form.
///
/// An empty body, or one with any other content type, yields
/// `T::default()` so the request still goes through validation.
#[derive(Debug, Clone)]
pub struct AuthBody<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(content_type: Option<&str>) -> BodyKind {
    let Some(mime) = content_type
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
    else {
        return BodyKind::Other;
    };

    if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else {
        BodyKind::Other
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for AuthBody<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = body_kind(
            req.headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );

        let (parts, body) = req.into_parts();
        let bytes = body::to_bytes(body, MAX_BODY_SIZE).await.map_err(|e| {
            tracing::debug!(error = %e, "could not read request body");
            (StatusCode::BAD_REQUEST, "Failed to read request body").into_response()
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) || kind == BodyKind::Other {
            return Ok(Self(T::default()));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        match kind {
            BodyKind::Json => Json::<T>::from_request(req, state)
                .await
                .map(|Json(value)| Self(value))
                .map_err(IntoResponse::into_response),
            BodyKind::Form => Form::<T>::from_request(req, state)
                .await
                .map(|Form(value)| Self(value))
                .map_err(IntoResponse::into_response),
            BodyKind::Other => Ok(Self(T::default())),
        }
    }
}
