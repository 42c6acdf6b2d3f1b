//! Service layer between HTTP handlers and repositories.

pub mod todo;

pub use todo::TodoService;
