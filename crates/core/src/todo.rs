//! Field rules for the todo resource.

use crate::error::CoreError;

/// Maximum title length in characters.
pub const TITLE_MAX_LEN: u64 = 200;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX_LEN: u64 = 2000;

/// Require a present, non-blank title.
pub fn require_title(title: Option<&str>) -> Result<&str, CoreError> {
    match title {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(CoreError::InvalidRequestParameters(
            "No title specified!".into(),
        )),
    }
}

/// Parse the optional `completed` list filter.
///
/// Only the literals `true` and `false` are accepted (case-insensitive).
pub fn parse_completed_filter(raw: Option<&str>) -> Result<Option<bool>, CoreError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(Some(true)),
        "false" => Ok(Some(false)),
        _ => Err(CoreError::InvalidRequestParameters(format!(
            "Invalid completed filter: {raw}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn title_present() {
        assert_eq!(require_title(Some("Buy milk")).unwrap(), "Buy milk");
    }

    #[test]
    fn title_missing_or_blank() {
        assert_matches!(require_title(None), Err(CoreError::InvalidRequestParameters(_)));
        assert_matches!(require_title(Some("")), Err(CoreError::InvalidRequestParameters(_)));
        assert_matches!(
            require_title(Some(" \t ")),
            Err(CoreError::InvalidRequestParameters(_))
        );
    }

    #[test]
    fn completed_filter_values() {
        assert_eq!(parse_completed_filter(None).unwrap(), None);
        assert_eq!(parse_completed_filter(Some("")).unwrap(), None);
        assert_eq!(parse_completed_filter(Some("true")).unwrap(), Some(true));
        assert_eq!(parse_completed_filter(Some("FALSE")).unwrap(), Some(false));
        assert_matches!(
            parse_completed_filter(Some("yes")),
            Err(CoreError::InvalidRequestParameters(_))
        );
    }
}
