//! Service-level endpoints outside the `/api/v1` tree, plus the fallback.

use axum::extract::{OriginalUri, State};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use todo_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    store_healthy: bool,
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello world!" }))
}

/// GET /health
///
/// Always 200; `status` is `degraded` when the store does not answer.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = state.todos.store_healthy().await;
    Json(HealthResponse {
        status: if store_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
    })
}

/// Fallback for any request no route matched, by path or by method: 404
/// echoing the full request path.
pub async fn path_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::Core(CoreError::PathNotFound {
        path: uri.path().to_string(),
    })
}
