//! PostgreSQL-backed [`TodoStore`] over the `todos` table.

use async_trait::async_trait;
use sqlx::PgPool;
use todo_core::types::{new_id, DbId};

use super::{StoreError, TodoStore};
use crate::models::todo::{DeleteOutcome, NewTodo, Todo, TodoFilter, UpdateOutcome, UpdateTodo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, completed, created_at, updated_at";

/// `$1` is the optional `completed` filter in every list/count query.
const FILTER: &str = "($1::boolean IS NULL OR completed = $1)";

#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn count(&self, filter: &TodoFilter) -> Result<i64, StoreError> {
        let query = format!("SELECT COUNT(*) FROM todos WHERE {FILTER}");
        let count = sqlx::query_scalar::<_, i64>(&query)
            .bind(filter.completed)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn find_page(
        &self,
        filter: &TodoFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Todo>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM todos WHERE {FILTER} \
             ORDER BY created_at, id \
             OFFSET $2 LIMIT $3"
        );
        let rows = sqlx::query_as::<_, Todo>(&query)
            .bind(filter.completed)
            .bind(offset)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        let row = sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, input: &NewTodo) -> Result<Todo, StoreError> {
        let query = format!(
            "INSERT INTO todos (id, title, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Todo>(&query)
            .bind(new_id())
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: DbId, changes: &UpdateTodo) -> Result<UpdateOutcome, StoreError> {
        // `target` counts the match; `updated` only touches the row when a
        // supplied value differs, so an identical write reports modified = 0.
        let (matched, modified) = sqlx::query_as::<_, (i64, i64)>(
            "WITH target AS ( \
                 SELECT id FROM todos WHERE id = $1 \
             ), updated AS ( \
                 UPDATE todos SET \
                     title = COALESCE($2, title), \
                     description = COALESCE($3, description), \
                     completed = COALESCE($4, completed), \
                     updated_at = clock_timestamp() \
                 WHERE id = $1 \
                   AND (title, description, completed) IS DISTINCT FROM \
                       (COALESCE($2, title), COALESCE($3, description), COALESCE($4, completed)) \
                 RETURNING id \
             ) \
             SELECT (SELECT COUNT(*) FROM target), (SELECT COUNT(*) FROM updated)",
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.completed)
        .fetch_one(&self.pool)
        .await?;

        Ok(UpdateOutcome {
            matched_count: matched.max(0) as u64,
            modified_count: modified.max(0) as u64,
        })
    }

    async fn delete(&self, id: DbId) -> Result<DeleteOutcome, StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(DeleteOutcome {
            deleted_count: result.rows_affected(),
        })
    }
}
