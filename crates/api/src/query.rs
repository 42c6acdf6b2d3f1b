//! Query parameter types for API handlers.

use serde::Deserialize;

/// Raw list parameters (`?page=&limit=&completed=`).
///
/// Kept as strings so unparseable values reach the service, which falls
/// back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListTodoParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub completed: Option<String>,
}
