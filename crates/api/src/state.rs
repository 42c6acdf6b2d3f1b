use std::sync::Arc;

use todo_db::repositories::TodoRepo;
use todo_db::store::TodoStore;

use crate::config::ServerConfig;
use crate::services::TodoService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Todo service over the injected store handle.
    pub todos: TodoService,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Wire the service stack over a store handle owned by the caller.
    pub fn new(store: Arc<dyn TodoStore>, config: ServerConfig) -> Self {
        Self {
            todos: TodoService::new(TodoRepo::new(store)),
            config: Arc::new(config),
        }
    }
}
