use crate::error::CoreError;

/// All primary keys are time-ordered UUIDs (v7), generated on insert.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh primary key.
pub fn new_id() -> DbId {
    uuid::Uuid::now_v7()
}

/// Parse a raw path segment into a [`DbId`].
///
/// Accepts any textual UUID form the `uuid` crate understands (hyphenated,
/// simple, braced, URN). Anything else, including an empty string, is an
/// [`CoreError::InvalidObjectId`].
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidObjectId("Invalid Id!".into()));
    }
    uuid::Uuid::try_parse(trimmed)
        .map_err(|_| CoreError::InvalidObjectId(format!("Invalid Id! '{raw}'")))
}
