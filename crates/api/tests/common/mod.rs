#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use reel_core::movie::{Movie, NewMovie};
use reel_core::pagination::Page;
use tower::ServiceExt;

use reel_api::config::ServerConfig;
use reel_api::router::build_app_router;
use reel_api::state::AppState;
use reel_db::{InMemoryMovieStore, MovieStore, StoreError, StoreResult};

/// Build a test `ServerConfig` with safe defaults.
///
/// The MongoDB settings are never used: tests run against the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        mongodb_uri: "mongodb://localhost:27017".to_string(),
        mongodb_database: None,
        mongodb_max_pool_size: 1,
    }
}

/// Build the full application router (same middleware stack as production)
/// over a fresh in-memory store.
///
/// The store handle is returned so tests can inspect it directly.
pub fn build_test_app() -> (Router, Arc<InMemoryMovieStore>) {
    let store = Arc::new(InMemoryMovieStore::new());
    (build_test_app_with_store(store.clone()), store)
}

/// Build the full application router over an arbitrary store.
pub fn build_test_app_with_store(store: Arc<dyn MovieStore>) -> Router {
    let config = test_config();
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// A store whose every call fails as if MongoDB were unreachable.
pub struct UnreachableMovieStore;

fn unreachable_error() -> StoreError {
    StoreError::Database(
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused").into(),
    )
}

#[async_trait::async_trait]
impl MovieStore for UnreachableMovieStore {
    async fn ping(&self) -> StoreResult<()> {
        Err(unreachable_error())
    }

    async fn list(&self, _page: Page) -> StoreResult<Vec<Movie>> {
        Err(unreachable_error())
    }

    async fn find_by_id(&self, _id: &str) -> StoreResult<Option<Movie>> {
        Err(unreachable_error())
    }

    async fn create(&self, _input: &NewMovie) -> StoreResult<Movie> {
        Err(unreachable_error())
    }

    async fn update(&self, _id: &str, _input: &NewMovie) -> StoreResult<Option<Movie>> {
        Err(unreachable_error())
    }

    async fn delete(&self, _id: &str) -> StoreResult<bool> {
        Err(unreachable_error())
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn request(app: &Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> Response {
    request(app, Method::GET, uri).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    request(app, Method::DELETE, uri).await
}

pub async fn json_request(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PUT, uri, body).await
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Id of the record created by an add request, taken from `Location`.
pub fn created_id(response: &Response) -> String {
    response
        .headers()
        .get("location")
        .expect("add response must carry a Location header")
        .to_str()
        .unwrap()
        .trim_start_matches("/api/")
        .to_string()
}
