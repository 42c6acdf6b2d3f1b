//! Entity store abstraction.
//!
//! The store exclusively owns persisted todo state. Callers hold an
//! `Arc<dyn TodoStore>` constructed by the process entry point; nothing
//! above this layer caches records between requests.

use async_trait::async_trait;
use todo_core::types::DbId;

use crate::models::todo::{DeleteOutcome, NewTodo, Todo, TodoFilter, UpdateOutcome, UpdateTodo};

pub mod memory;
pub mod postgres;

pub use memory::MemoryTodoStore;
pub use postgres::PgTodoStore;

/// Name of the `(title, description)` uniqueness constraint.
pub const UQ_TITLE_DESCRIPTION: &str = "uq_todos_title_description";

/// PostgreSQL SQLSTATE for `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Errors raised by a [`TodoStore`].
///
/// A uniqueness violation is kept apart from every other failure so the
/// service layer can reclassify it without inspecting backend details.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return StoreError::UniqueViolation(constraint);
            }
        }
        StoreError::Database(err)
    }
}

/// Persistence operations for todo records.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Cheap liveness probe.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Total records matching `filter`.
    async fn count(&self, filter: &TodoFilter) -> Result<i64, StoreError>;

    /// A window of matching records in insertion order. Returns an empty
    /// list when `offset` is past the end.
    async fn find_page(
        &self,
        filter: &TodoFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Todo>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, StoreError>;

    /// Insert a new record with a fresh id and `completed = false`.
    async fn insert(&self, input: &NewTodo) -> Result<Todo, StoreError>;

    /// Replace the supplied mutable fields. Zero counts when `id` matches
    /// nothing; `modified_count` is zero when every value was already equal.
    async fn update(&self, id: DbId, changes: &UpdateTodo) -> Result<UpdateOutcome, StoreError>;

    async fn delete(&self, id: DbId) -> Result<DeleteOutcome, StoreError>;
}
