//! Page/limit windowing of a collection (`?page=&limit=`).
//!
//! Lives in `core` (no database deps) so the service layer can validate
//! raw query values before any store call, and the repository can shape
//! the response envelope.

use serde::Serialize;

use crate::error::CoreError;

/// Page used when `page` is absent or unparseable.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `limit` is absent or unparseable.
pub const DEFAULT_LIMIT: i64 = 10;

/// A validated pagination window. `page` and `limit` are both `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
    offset: i64,
}

impl PageRequest {
    /// Validate an explicit page/limit pair.
    pub fn new(page: i64, limit: i64) -> Result<Self, CoreError> {
        if page < 1 {
            return Err(CoreError::InvalidRequestParameters(format!(
                "Invalid page: {page}"
            )));
        }
        if limit < 1 {
            return Err(CoreError::InvalidRequestParameters(format!(
                "Invalid limit: {limit}"
            )));
        }
        let offset = (page - 1).checked_mul(limit).ok_or_else(|| {
            CoreError::InvalidRequestParameters(format!(
                "Page {page} with limit {limit} is out of range"
            ))
        })?;
        Ok(Self {
            page,
            limit,
            offset,
        })
    }

    /// Build a window from raw query-string values.
    ///
    /// Absent or unparseable values fall back to [`DEFAULT_PAGE`] /
    /// [`DEFAULT_LIMIT`]; parsed values below 1 are rejected.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Result<Self, CoreError> {
        Self::new(
            parse_or_default(page, DEFAULT_PAGE),
            parse_or_default(limit, DEFAULT_LIMIT),
        )
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of records skipped before this window: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// The whole trimmed value must be an integer; `"2abc"` is unparseable.
fn parse_or_default(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

/// One page of results plus the total number of matching records.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T: Serialize> {
    /// Total matching records, independent of the window.
    pub count: i64,
    pub next_page: Option<i64>,
    pub prev_page: Option<i64>,
    pub data: Vec<T>,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(window: PageRequest, count: i64, data: Vec<T>) -> Self {
        let next_page = (window.offset.saturating_add(window.limit) < count)
            .then_some(window.page + 1);
        let prev_page = (window.page > 1).then_some(window.page - 1);
        Self {
            count,
            next_page,
            prev_page,
            data,
        }
    }
}
