//! Errors returned by the `/api` forwarder.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend did not answer within the configured timeout.
    #[error("kiosk backend timed out")]
    Timeout,

    /// The backend could not be reached or the exchange broke off.
    #[error("kiosk backend unreachable: {0}")]
    Unreachable(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Unreachable(e.to_string()) }
    }
}

impl ProxyError {
    /// Message shown to the browser; the client surfaces it verbatim.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Timeout => "The kiosk service took too long to respond. Please try again.",
            Self::Unreachable(_) => "The kiosk service is unavailable. Please try again later.",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api forward failed");
        let body = serde_json::json!({ "message": self.user_message() });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}
