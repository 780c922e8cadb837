//! Errors raised while reading persisted records.

use thiserror::Error;

/// A stored record that cannot be turned into domain values.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A stored field is negative or doesn't fit the domain type
    #[error("Field '{field}' holds {value}, which is out of range")]
    OutOfRange { field: &'static str, value: i64 },

    /// The record isn't valid JSON for its shape
    #[error("Malformed record: {0}")]
    Json(#[from] serde_json::Error),
}

impl RecordError {
    pub fn out_of_range(field: &'static str, value: i64) -> Self {
        Self::OutOfRange { field, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_names_the_field() {
        let err = RecordError::out_of_range("current_day", -2);
        assert_eq!(
            err.to_string(),
            "Field 'current_day' holds -2, which is out of range"
        );
    }

    #[test]
    fn wraps_json_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RecordError = json_err.into();
        assert!(matches!(err, RecordError::Json(_)));
    }
}
