#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use vidshelf_api::app::build_app;
use vidshelf_api::config::ServerConfig;
use vidshelf_api::state::AppState;
use vidshelf_db::Store;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Build the full application router over a fresh, empty store.
///
/// The router is cheap to clone and every clone shares the same store, so a
/// test can send several requests with `app.clone()`.
pub fn build_test_app() -> Router {
    build_test_app_with_store(vidshelf_db::create_store())
}

/// Build the full application router over an existing store.
pub fn build_test_app_with_store(store: Store) -> Router {
    build_app(AppState::new(store, test_config()))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn with_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    with_json(app, Method::PUT, uri, body).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a video through the API and return the response body.
pub async fn create_video(app: &Router, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(app.clone(), "/videos", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// The `field` of every entry in an `errorsMessages` envelope.
pub fn error_fields(json: &serde_json::Value) -> Vec<String> {
    json["errorsMessages"]
        .as_array()
        .expect("errorsMessages array")
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect()
}
