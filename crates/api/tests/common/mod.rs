#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use todo_api::config::{LogFormat, ServerConfig, StoreBackend};
use todo_api::router::build_app_router;
use todo_api::state::AppState;
use todo_core::types::DbId;
use todo_db::models::todo::{DeleteOutcome, NewTodo, Todo, TodoFilter, UpdateOutcome, UpdateTodo};
use todo_db::store::{MemoryTodoStore, StoreError, TodoStore};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        db_max_connections: 1,
        db_acquire_timeout_secs: 1,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn TodoStore>) -> Router {
    let config = test_config();
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// Router over a fresh in-memory store. Clones share the store.
pub fn memory_app() -> Router {
    build_test_app(Arc::new(MemoryTodoStore::new()))
}

/// Router whose store fails every call the way a timed-out pool does.
pub fn failing_app() -> Router {
    build_test_app(Arc::new(FailingStore))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

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

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw string body with a JSON content type.
pub async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: String,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a todo and return its JSON representation.
pub async fn create_todo(app: &Router, title: &str, description: &str) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        "/api/v1/todo",
        serde_json::json!({ "title": title, "description": description }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

pub struct FailingStore;

fn unavailable<T>() -> Result<T, StoreError> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl TodoStore for FailingStore {
    async fn ping(&self) -> Result<(), StoreError> {
        unavailable()
    }

    async fn count(&self, _filter: &TodoFilter) -> Result<i64, StoreError> {
        unavailable()
    }

    async fn find_page(
        &self,
        _filter: &TodoFilter,
        _offset: i64,
        _limit: i64,
    ) -> Result<Vec<Todo>, StoreError> {
        unavailable()
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Todo>, StoreError> {
        unavailable()
    }

    async fn insert(&self, _input: &NewTodo) -> Result<Todo, StoreError> {
        unavailable()
    }

    async fn update(&self, _id: DbId, _changes: &UpdateTodo) -> Result<UpdateOutcome, StoreError> {
        unavailable()
    }

    async fn delete(&self, _id: DbId) -> Result<DeleteOutcome, StoreError> {
        unavailable()
    }
}
