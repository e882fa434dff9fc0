//! Router test helpers.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use pocketbook_shared::CorsConfig;
use serde_json::Value;
use tower::ServiceExt;

use crate::{AppState, create_router};

/// Full router over a fresh in-memory store.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            router: create_router(AppState::in_memory(), &CorsConfig::default()),
        }
    }

    /// Sends a request and decodes the JSON response body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    /// Sends a request that must succeed with `expected`, returning `data`.
    pub async fn expect(&self, request: Request<Body>, expected: StatusCode) -> Value {
        let (status, body) = self.send(request).await;
        assert_eq!(status, expected, "unexpected response: {body}");
        body["data"].clone()
    }
}

/// Parses a decimal rendered as a JSON string.
pub fn decimal(value: &Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str, body: &Value) -> Request<Body> {
    with_json("POST", uri, body)
}

pub fn put(uri: &str, body: &Value) -> Request<Body> {
    with_json("PUT", uri, body)
}

fn with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
