/// Domain error kinds shared by the service and HTTP layers.
///
/// These are independent of the underlying store's error representation.
/// Store failures that cannot be classified never become a `CoreError`; they
/// travel separately and surface as a generic server error.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The identifier is not syntactically valid for the store's key format.
    #[error("Invalid object id: {0}")]
    InvalidObjectId(String),

    /// Bad pagination parameters, a missing required field, or a malformed body.
    #[error("Invalid request parameters: {0}")]
    InvalidRequestParameters(String),

    /// A uniqueness constraint rejected the write.
    #[error("Duplicate item: {0}")]
    DuplicateItem(String),

    /// No route matched the request path.
    #[error("Path not found - {path}")]
    PathNotFound { path: String },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },
}
