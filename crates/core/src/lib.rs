//! Domain building blocks for the todo service.
//!
//! No database or HTTP dependencies: error taxonomy, identifier parsing,
//! pagination windows and field rules.

pub mod error;
pub mod pagination;
pub mod todo;
pub mod types;
