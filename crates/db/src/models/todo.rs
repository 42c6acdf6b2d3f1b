//! Todo entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::todo::{DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use todo_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `todos` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a todo. `title` is checked by the service so a
/// missing title is reported as a domain error rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTodo {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: Option<String>,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    pub description: Option<String>,
}

/// Request body for updating a todo. Only supplied fields are replaced;
/// `id` and timestamps are never user-settable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTodo {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: Option<String>,
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateTodo {
    /// True when none of the mutable fields were supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

/// A normalized insert: title already validated, description defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
}

/// Optional narrowing applied to both the page and the total count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub completed: Option<bool>,
}

impl TodoFilter {
    pub fn matches(&self, todo: &Todo) -> bool {
        self.completed.map_or(true, |c| todo.completed == c)
    }
}

/// Result of an update: rows matched by id, and rows whose values changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}
