use axum::http::HeaderValue;
use axum::http::header::COOKIE;

use super::*;

#[test]
fn upstream_url_joins_base_path_and_query() {
    assert_eq!(
        upstream_url("https://localhost:7273", "Product", None),
        "https://localhost:7273/api/Product"
    );
    assert_eq!(
        upstream_url("https://localhost:7273/", "/Cart/update/4", Some("")),
        "https://localhost:7273/api/Cart/update/4"
    );
    assert_eq!(
        upstream_url("http://kiosk:5000", "Users", Some("page=2&size=10")),
        "http://kiosk:5000/api/Users?page=2&size=10"
    );
}

#[test]
fn forwarded_request_headers_keeps_only_backend_headers() {
    let mut incoming = HeaderMap::new();
    incoming.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    incoming.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    incoming.insert(ACCEPT, HeaderValue::from_static("application/json"));
    incoming.insert(COOKIE, HeaderValue::from_static("session=1"));
    incoming.insert("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));

    let out = forwarded_request_headers(&incoming);
    assert_eq!(out.len(), 3);
    assert_eq!(out.get(AUTHORIZATION).unwrap(), "Bearer abc");
    assert_eq!(out.get(CONTENT_TYPE).unwrap(), "application/json");
    assert!(out.get(COOKIE).is_none());
}

#[test]
fn forwarded_request_headers_preserves_multipart_boundary() {
    let mut incoming = HeaderMap::new();
    incoming.insert(CONTENT_TYPE, HeaderValue::from_static("multipart/form-data; boundary=xyz"));

    let out = forwarded_request_headers(&incoming);
    assert_eq!(out.get(CONTENT_TYPE).unwrap(), "multipart/form-data; boundary=xyz");
    assert!(out.get(AUTHORIZATION).is_none());
}

#[test]
fn api_subpath_keeps_percent_encoding() {
    let uri: Uri = "/api/Product/a%2Fb?x=1".parse().unwrap();
    assert_eq!(api_subpath(&uri), "Product/a%2Fb");
    assert_eq!(
        upstream_url("https://localhost:7273", api_subpath(&uri), uri.query()),
        "https://localhost:7273/api/Product/a%2Fb?x=1"
    );

    let outside: Uri = "/healthz".parse().unwrap();
    assert_eq!(api_subpath(&outside), "");
}
