//! Repositories sit between the service layer and the entity store.

pub mod todo_repo;

pub use todo_repo::TodoRepo;
