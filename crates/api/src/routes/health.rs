use axum::routing::get;
use axum::Router;

use crate::handlers::health::{self, path_not_found};
use crate::state::AppState;

/// Root-level routes (not under `/api/v1`).
///
/// ```text
/// GET /          -> root
/// GET /health    -> health_check
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .method_not_allowed_fallback(path_not_found)
}
