#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use unitconv_core::engine::ConversionEngine;
use unitconv_core::seed::seed_default_rules;
use unitconv_core::store::MemoryRuleStore;

use unitconv_api::config::ServerConfig;
use unitconv_api::router::build_app_router;
use unitconv_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: None,
        seed_default_rules: false,
    }
}

/// Build the full application router over the given engine, with the same
/// middleware stack production uses.
pub fn build_app(engine: ConversionEngine) -> Router {
    let config = test_config();
    let state = AppState { engine };
    build_app_router(state, &config)
}

/// An engine over an empty in-memory store.
pub fn empty_engine() -> ConversionEngine {
    ConversionEngine::new(Arc::new(MemoryRuleStore::new()))
}

/// An engine over an in-memory store holding the default rules.
pub async fn seeded_engine() -> ConversionEngine {
    let engine = empty_engine();
    seed_default_rules(&engine).await.unwrap();
    engine
}

/// Router over an empty in-memory store.
pub fn build_test_app() -> Router {
    build_app(empty_engine())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    with_json(app, Method::PUT, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
