pub mod health;
pub mod todo;

use axum::Router;
use todo_core::types::DbId;

use crate::state::AppState;

/// Prefix every versioned route is nested under.
pub const API_PREFIX: &str = "/api/v1";

/// Mount point of the todo resource inside [`API_PREFIX`].
pub const TODO_PATH: &str = "/todo";

/// Build the `/api/v1` route tree.
///
/// ```text
/// /todo                list, create
/// /todo/{id}           get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest(TODO_PATH, todo::router())
}

/// Absolute path of a single todo, used for the `Location` header.
pub fn todo_location(id: DbId) -> String {
    format!("{API_PREFIX}{TODO_PATH}/{id}")
}
