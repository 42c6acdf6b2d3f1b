use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use todo_core::error::CoreError;
use todo_db::store::StoreError;

/// Application-level error type for the service and HTTP handlers.
///
/// Wraps [`CoreError`] for classified domain errors and [`StoreError`] for
/// store failures the service could not classify. Implements
/// [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A classified domain error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An unclassified store failure. Always surfaces as a generic 500.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// An internal error with a human-readable message (logged, never sent).
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::InvalidRequestParameters(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Core(CoreError::InvalidRequestParameters(rejection.body_text()))
    }
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::InvalidObjectId(msg) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_OBJECT_ID",
                    msg.clone(),
                ),
                CoreError::InvalidRequestParameters(msg) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_REQUEST_PARAMETERS",
                    msg.clone(),
                ),
                CoreError::DuplicateItem(msg) => {
                    (StatusCode::CONFLICT, "DUPLICATE_ITEM", msg.clone())
                }
                CoreError::PathNotFound { path } => (
                    StatusCode::NOT_FOUND,
                    "PATH_NOT_FOUND",
                    format!("Path not found - {path}"),
                ),
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
            },

            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let AppError::Core(CoreError::PathNotFound { path }) = &self {
            body["path"] = json!(path);
        }

        (status, axum::Json(body)).into_response()
    }
}
