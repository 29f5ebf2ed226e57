//! `/api/*` reverse proxy to the study-material backend.
//!
//! The console calls a same-origin `/api` base; this handler forwards the
//! method, path, query, body and content type unchanged and relays the
//! backend's status, content type and body. An unreachable backend becomes a
//! 502 with the same `{"detail": ..}` shape the backend uses for errors.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend unavailable: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("failed to build proxy response: {0}")]
    Response(#[from] axum::http::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        let body = json!({ "detail": self.to_string() });
        (StatusCode::BAD_GATEWAY, axum::Json(body)).into_response()
    }
}

/// Backend URL for an incoming `/api/...` request.
#[must_use]
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", backend_url.trim_end_matches('/'))
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.backend_url, &uri);
    let mut request = state.http.request(method, &url);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        request = request.header(CONTENT_TYPE, content_type.clone());
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(%url, status = status.as_u16(), "proxied");

    let mut response = Response::builder().status(status);
    if let Some(content_type) = content_type {
        response = response.header(CONTENT_TYPE, content_type);
    }
    Ok(response.body(Body::from(bytes))?)
}
