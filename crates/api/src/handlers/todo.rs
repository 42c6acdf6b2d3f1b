//! Handlers for the `/todo` resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use todo_core::error::CoreError;
use todo_db::models::todo::{CreateTodo, UpdateTodo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::query::ListTodoParams;
use crate::routes::todo_location;
use crate::state::AppState;

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Todo",
        id: id.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/todo?page=&limit=&completed=
///
/// List todos one page at a time, with the total count.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListTodoParams>,
) -> AppResult<impl IntoResponse> {
    let page = state
        .todos
        .get_all_todo_items(
            params.page.as_deref(),
            params.limit.as_deref(),
            params.completed.as_deref(),
        )
        .await?;
    Ok(Json(page))
}

/// GET /api/v1/todo/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let todo = state
        .todos
        .get_todo_item(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(todo))
}

/// POST /api/v1/todo
///
/// Create a todo. Responds 201 with a `Location` header for the new record.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.create_todo_item(input).await?;

    tracing::info!(todo_id = %todo.id, title = %todo.title, "Todo created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, todo_location(todo.id))],
        Json(todo),
    ))
}

/// PUT /api/v1/todo/{id}
///
/// Replace the supplied fields of a todo. The body is checked before the
/// id is looked up; an unknown (but well-formed) id is a 404 rather than a
/// zero-count success.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(changes): ApiJson<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    state.todos.validate_update(&changes)?;

    if state.todos.get_todo_item(&id).await?.is_none() {
        return Err(not_found(&id));
    }

    let outcome = state.todos.update_todo_item(&id, changes).await?;

    tracing::info!(
        todo_id = %id,
        matched = outcome.matched_count,
        modified = outcome.modified_count,
        "Todo updated",
    );

    Ok(Json(outcome))
}

/// DELETE /api/v1/todo/{id}
///
/// Deleting an id that matches nothing reports `deletedCount: 0`.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let outcome = state.todos.delete_todo_item(&id).await?;

    tracing::info!(todo_id = %id, deleted = outcome.deleted_count, "Todo deleted");

    Ok(Json(outcome))
}

