use super::*;

#[tokio::test]
async fn proxy_error_renders_bad_gateway_with_message_body() {
    let response = ProxyError::Unreachable("connection refused".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "The kiosk service is unavailable. Please try again later.");
}

#[test]
fn timeout_has_its_own_message() {
    assert_ne!(ProxyError::Timeout.user_message(), ProxyError::Unreachable(String::new()).user_message());
    assert_eq!(ProxyError::Timeout.to_string(), "kiosk backend timed out");
}
