//! Extraction error types.

/// Errors that abort a page extraction.
///
/// Most malformed markup is skipped rather than reported; only required
/// numeric fields that are present but unreadable end up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Hour text inside an hour block is not an integer
    #[error("cannot parse hour: {0:?}")]
    InvalidHour(String),

    /// Hour is an integer but not a valid hour of day
    #[error("hour out of range: {0}")]
    HourOutOfRange(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ParseError::InvalidHour("5a".into());
        assert_eq!(err.to_string(), "cannot parse hour: \"5a\"");

        let err = ParseError::HourOutOfRange(25);
        assert_eq!(err.to_string(), "hour out of range: 25");
    }
}
