//! Error type shared by every REST helper.
//!
//! ERROR HANDLING
//! ==============
//! The UI never branches on error kind beyond picking a message: a backend
//! message wins when one was sent, otherwise the call site's fallback text is
//! shown.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {}", message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, message: message_from_body(body) }
    }

    /// Text to show the user: the backend's message, or `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// Whether the backend rejected the bearer token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"message": …}`, ASP.NET problem details (`{"title": …}`), a bare
/// JSON string, or plain text. Empty or HTML bodies yield `None`.
#[must_use]
pub fn message_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with('<') {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => ["message", "title", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned),
        Ok(serde_json::Value::String(s)) => Some(s.trim().to_owned()).filter(|s| !s.is_empty()),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_owned()),
    }
}
