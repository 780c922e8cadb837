//! Unified error types for the domain layer
//!
//! The calculation engine favors renderable fallbacks over errors, so most
//! operations are infallible. Errors exist for the places where silently
//! continuing would be wrong: malformed calendars and unparseable identifiers.

use thiserror::Error;

/// Fatal calendar configuration problems detected at advance time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// A calendar needs at least one month
    #[error("Calendar has no months")]
    NoMonths,

    /// A month with no days can never absorb a carry
    #[error("Month {index} ('{name}') has zero days")]
    EmptyMonth { index: usize, name: String },

    /// Hours per day must be positive
    #[error("Calendar has zero hours per day")]
    ZeroHoursPerDay,

    /// Clock fields that cannot be normalized upwards (month 0, day 0)
    #[error("World clock is not addressable: {0}")]
    UnaddressableClock(String),

    /// The day cascade needed more than one pass per month plus one
    #[error("Day carry did not settle after {passes} passes")]
    CascadeExhausted { passes: u64 },
}

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Calendar configuration or clock state is unusable
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if id.is_empty() {
    ///     return Err(DomainError::validation("Ruleset id cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("ruleset id cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: ruleset id cannot be empty"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown time unit: week");
        assert_eq!(err.to_string(), "Parse error: Unknown time unit: week");
    }

    #[test]
    fn test_from_calendar_error() {
        let err: DomainError = CalendarError::EmptyMonth {
            index: 2,
            name: "Void".to_string(),
        }
        .into();
        assert!(matches!(err, DomainError::Calendar(_)));
        assert!(err.to_string().contains("'Void'"));
        assert!(err.to_string().contains("zero days"));
    }
}
