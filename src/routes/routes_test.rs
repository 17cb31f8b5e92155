use axum::body::{Body, Bytes};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use axum::http::{HeaderMap, Method, Request, Uri};
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;

use super::*;
use crate::config::{KioskConfig, UpstreamTimeouts};

fn test_state(api_url: &str) -> AppState {
    AppState::new(KioskConfig {
        port: 0,
        api_url: api_url.to_owned(),
        accept_invalid_certs: false,
        timeouts: UpstreamTimeouts { request_secs: 5, connect_secs: 2 },
    })
    .unwrap()
}

/// Backend stand-in: reports what it received as a 409 problem document.
async fn echo_backend(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let seen = serde_json::json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "authorization": headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
        "content_type": headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        "cookie": headers.contains_key(COOKIE),
        "body": String::from_utf8_lossy(&body),
    });
    (StatusCode::CONFLICT, [(CONTENT_TYPE, "application/problem+json")], seen.to_string()).into_response()
}

async fn spawn_echo_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().fallback(echo_backend)).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_returns_ok() {
    let app = api_routes(test_state("http://127.0.0.1:1"));
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unreachable_backend_returns_bad_gateway_json() {
    let app = api_routes(test_state("http://127.0.0.1:1"));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/Auth/login")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"email":"a@b.c","password":"x"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn unknown_path_outside_api_is_not_forwarded() {
    let app = api_routes(test_state("http://127.0.0.1:1"));
    let response = app
        .oneshot(Request::builder().uri("/apix").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_request_is_replayed_and_backend_reply_returned_unchanged() {
    let app = api_routes(test_state(&spawn_echo_backend().await));
    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/Cart/update/4?source=kiosk")
                .header(AUTHORIZATION, "Bearer abc")
                .header(CONTENT_TYPE, "application/json")
                .header(COOKIE, "session=1")
                .body(Body::from(r#"{"quantity":3}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "application/problem+json");

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let seen: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(seen.to_string().as_bytes(), &bytes[..]);
    assert_eq!(seen["method"], "PUT");
    assert_eq!(seen["path"], "/api/Cart/update/4");
    assert_eq!(seen["query"], "source=kiosk");
    assert_eq!(seen["authorization"], "Bearer abc");
    assert_eq!(seen["content_type"], "application/json");
    assert_eq!(seen["cookie"], false);
    assert_eq!(seen["body"], r#"{"quantity":3}"#);
}

#[tokio::test]
async fn encoded_path_segments_reach_backend_encoded() {
    let app = api_routes(test_state(&spawn_echo_backend().await));
    let response = app
        .oneshot(Request::builder().uri("/api/Product/a%2Fb").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let seen: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(seen["method"], "GET");
    assert_eq!(seen["path"], "/api/Product/a%2Fb");
    assert!(seen["query"].is_null());
    assert!(seen["authorization"].is_null());
}
