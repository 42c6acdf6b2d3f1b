//! Todo service: input contracts and store-error classification.
//!
//! Every operation validates its inputs before touching the store, so a
//! malformed id or bad pagination window never costs a round trip. Store
//! errors are inspected once here: a uniqueness violation becomes
//! [`CoreError::DuplicateItem`], everything else passes through unclassified.

use todo_core::error::CoreError;
use todo_core::pagination::{PageRequest, Paginated};
use todo_core::todo::{parse_completed_filter, require_title};
use todo_core::types::parse_id;
use todo_db::models::todo::{
    CreateTodo, DeleteOutcome, NewTodo, Todo, TodoFilter, UpdateOutcome, UpdateTodo,
};
use todo_db::repositories::TodoRepo;
use todo_db::store::StoreError;
use validator::{Validate, ValidationErrors};

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct TodoService {
    repo: TodoRepo,
}

impl TodoService {
    pub fn new(repo: TodoRepo) -> Self {
        Self { repo }
    }

    /// Whether the backing store answers a liveness probe.
    pub async fn store_healthy(&self) -> bool {
        match self.repo.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Store health check failed");
                false
            }
        }
    }

    /// List todos from raw query values.
    ///
    /// Absent or unparseable `page`/`limit` default to 1/10; values below 1
    /// fail with [`CoreError::InvalidRequestParameters`].
    pub async fn get_all_todo_items(
        &self,
        page: Option<&str>,
        limit: Option<&str>,
        completed: Option<&str>,
    ) -> AppResult<Paginated<Todo>> {
        let window = PageRequest::from_raw(page, limit)?;
        let filter = TodoFilter {
            completed: parse_completed_filter(completed)?,
        };
        self.repo
            .get_all(window, &filter)
            .await
            .map_err(classify)
    }

    /// Fetch one todo. `Ok(None)` when the id is well-formed but unknown.
    pub async fn get_todo_item(&self, id: &str) -> AppResult<Option<Todo>> {
        let id = parse_id(id)?;
        self.repo.get_by_id(id).await.map_err(classify)
    }

    pub async fn create_todo_item(&self, input: CreateTodo) -> AppResult<Todo> {
        let title = require_title(input.title.as_deref())?.to_string();
        input.validate().map_err(invalid_fields)?;

        let new_todo = NewTodo {
            title,
            description: input.description.unwrap_or_default(),
        };
        self.repo.create(&new_todo).await.map_err(classify)
    }

    /// Apply a partial update. Does not distinguish "no match" from
    /// "matched, nothing changed"; callers wanting a 404 check existence first.
    pub async fn update_todo_item(&self, id: &str, changes: UpdateTodo) -> AppResult<UpdateOutcome> {
        let id = parse_id(id)?;
        self.validate_update(&changes)?;

        self.repo.update(id, &changes).await.map_err(classify)
    }

    /// Check an update body on its own: at least one field supplied, a
    /// non-blank title when one is given, and field lengths in range.
    pub fn validate_update(&self, changes: &UpdateTodo) -> AppResult<()> {
        if changes.is_empty() {
            return Err(CoreError::InvalidRequestParameters("Empty body parameter!".into()).into());
        }
        if changes.title.is_some() {
            require_title(changes.title.as_deref())?;
        }
        changes.validate().map_err(invalid_fields)
    }

    pub async fn delete_todo_item(&self, id: &str) -> AppResult<DeleteOutcome> {
        let id = parse_id(id)?;
        self.repo.delete(id).await.map_err(classify)
    }
}

/// Map a store failure onto the domain taxonomy where one applies.
fn classify(err: StoreError) -> AppError {
    match err {
        StoreError::UniqueViolation(constraint) => AppError::Core(CoreError::DuplicateItem(
            format!("Duplicate item, unique index {constraint} failed."),
        )),
        other => AppError::Store(other),
    }
}

fn invalid_fields(errors: ValidationErrors) -> AppError {
    AppError::Core(CoreError::InvalidRequestParameters(errors.to_string()))
}
