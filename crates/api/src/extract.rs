//! Request extractors that report rejections through [`AppError`].
//!
//! Axum's stock `Json` and `Query` reject with plain-text bodies; these
//! wrappers route the same failures into the JSON error envelope as
//! `INVALID_REQUEST_PARAMETERS` (400).

use axum::extract::{FromRequest, FromRequestParts, Query};
use axum::Json;

use crate::error::AppError;

/// JSON request body. Malformed JSON, wrong field types and a missing
/// `Content-Type` all become a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query-string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
