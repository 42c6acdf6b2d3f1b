//! Repository for todo records.
//!
//! Translates pagination and filter requests into store calls and shapes
//! the paginated envelope. Holds no cached state of its own.

use std::sync::Arc;

use todo_core::pagination::{PageRequest, Paginated};
use todo_core::types::DbId;

use crate::models::todo::{DeleteOutcome, NewTodo, Todo, TodoFilter, UpdateOutcome, UpdateTodo};
use crate::store::{StoreError, TodoStore};

/// Provides CRUD operations for todos over an injected [`TodoStore`].
#[derive(Clone)]
pub struct TodoRepo {
    store: Arc<dyn TodoStore>,
}

impl TodoRepo {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }

    /// Fetch one window of todos plus the total matching count.
    ///
    /// An empty collection, or a window past the end, yields an empty
    /// `data` list rather than an error.
    pub async fn get_all(
        &self,
        window: PageRequest,
        filter: &TodoFilter,
    ) -> Result<Paginated<Todo>, StoreError> {
        let (count, data) = tokio::try_join!(
            self.store.count(filter),
            self.store
                .find_page(filter, window.offset(), window.limit()),
        )?;
        Ok(Paginated::new(window, count, data))
    }

    pub async fn get_by_id(&self, id: DbId) -> Result<Option<Todo>, StoreError> {
        self.store.find_by_id(id).await
    }

    /// Insert a new todo. A `(title, description)` clash comes back as
    /// [`StoreError::UniqueViolation`].
    pub async fn create(&self, input: &NewTodo) -> Result<Todo, StoreError> {
        self.store.insert(input).await
    }

    /// Replace the supplied mutable fields. Zero counts when nothing matched.
    pub async fn update(
        &self,
        id: DbId,
        changes: &UpdateTodo,
    ) -> Result<UpdateOutcome, StoreError> {
        self.store.update(id, changes).await
    }

    pub async fn delete(&self, id: DbId) -> Result<DeleteOutcome, StoreError> {
        self.store.delete(id).await
    }
}
