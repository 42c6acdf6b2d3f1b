//! In-process [`TodoStore`] used by tests and `STORE_BACKEND=memory` runs.
//!
//! Records live in insertion order inside a single `RwLock`; the
//! `(title, description)` uniqueness rule matches the PostgreSQL index.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use todo_core::types::{new_id, DbId};

use super::{StoreError, TodoStore, UQ_TITLE_DESCRIPTION};
use crate::models::todo::{DeleteOutcome, NewTodo, Todo, TodoFilter, UpdateOutcome, UpdateTodo};

#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    rows: RwLock<Vec<Todo>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn is_duplicate(rows: &[Todo], skip: Option<DbId>, title: &str, description: &str) -> bool {
    rows.iter()
        .filter(|t| Some(t.id) != skip)
        .any(|t| t.title == title && t.description == description)
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn count(&self, filter: &TodoFilter) -> Result<i64, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|t| filter.matches(t)).count() as i64)
    }

    async fn find_page(
        &self,
        filter: &TodoFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Todo>, StoreError> {
        let rows = self.rows.read().await;
        let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        Ok(rows
            .iter()
            .filter(|t| filter.matches(t))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|t| t.id == id).cloned())
    }

    async fn insert(&self, input: &NewTodo) -> Result<Todo, StoreError> {
        let mut rows = self.rows.write().await;
        if is_duplicate(&rows, None, &input.title, &input.description) {
            return Err(StoreError::UniqueViolation(UQ_TITLE_DESCRIPTION.into()));
        }

        let now = Utc::now();
        let todo = Todo {
            id: new_id(),
            title: input.title.clone(),
            description: input.description.clone(),
            completed: false,
            created_at: now,
            updated_at: now,
        };
        rows.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: DbId, changes: &UpdateTodo) -> Result<UpdateOutcome, StoreError> {
        let mut rows = self.rows.write().await;
        let Some(pos) = rows.iter().position(|t| t.id == id) else {
            return Ok(UpdateOutcome::default());
        };

        let current = &rows[pos];
        let title = changes.title.clone().unwrap_or_else(|| current.title.clone());
        let description = changes
            .description
            .clone()
            .unwrap_or_else(|| current.description.clone());
        let completed = changes.completed.unwrap_or(current.completed);

        if title == current.title
            && description == current.description
            && completed == current.completed
        {
            return Ok(UpdateOutcome {
                matched_count: 1,
                modified_count: 0,
            });
        }

        if is_duplicate(&rows, Some(id), &title, &description) {
            return Err(StoreError::UniqueViolation(UQ_TITLE_DESCRIPTION.into()));
        }

        let row = &mut rows[pos];
        row.title = title;
        row.description = description;
        row.completed = completed;
        row.updated_at = Utc::now();

        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: 1,
        })
    }

    async fn delete(&self, id: DbId) -> Result<DeleteOutcome, StoreError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|t| t.id != id);
        Ok(DeleteOutcome {
            deleted_count: (before - rows.len()) as u64,
        })
    }
}
