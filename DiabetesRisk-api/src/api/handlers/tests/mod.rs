mod health_test;
mod prediction_test;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use diabetes_risk_domain::testing::{MockHealthService, MockPredictionRelay};

use crate::api::routes::create_app;

/// Build the router around the given mocks
pub(crate) fn test_app(relay: Arc<MockPredictionRelay>, health: MockHealthService) -> Router {
    create_app(relay, Arc::new(health), None, "test")
}

pub(crate) fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request and return status plus raw body
pub(crate) async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

/// Send one request and decode the body as JSON
pub(crate) async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("body is not JSON ({}): {}", e, String::from_utf8_lossy(&body)));
    (status, json)
}
