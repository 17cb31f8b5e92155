//! `/api/*` forwarder.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this server. Every `/api/...` request is
//! replayed against the kiosk backend with the same method, path, query and
//! body, carrying over just the headers the backend reads. The backend's
//! status, content type and body come back unchanged so client-side error
//! extraction sees exactly what the backend sent.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

/// Request headers passed through to the backend.
const FORWARDED_HEADERS: [axum::http::HeaderName; 3] = [AUTHORIZATION, CONTENT_TYPE, ACCEPT];

/// Backend URL for `/api/{path}?{query}`.
#[must_use]
pub fn upstream_url(api_url: &str, path: &str, query: Option<&str>) -> String {
    let base = api_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/api/{path}?{q}"),
        None => format!("{base}/api/{path}"),
    }
}

/// Path below `/api/` exactly as the browser sent it, still percent-encoded.
#[must_use]
pub fn api_subpath(uri: &Uri) -> &str {
    uri.path().strip_prefix("/api/").unwrap_or_default()
}

/// Copy the forwarded subset of `incoming`.
#[must_use]
pub fn forwarded_request_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in FORWARDED_HEADERS {
        for value in incoming.get_all(&name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: replay the request against the kiosk backend.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.config.api_url, api_subpath(&uri), uri.query());

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_request_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, %url, %status, len = bytes.len(), "api forwarded");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}
