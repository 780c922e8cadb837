//! Time operation errors.

use sheetsmith_domain::CalendarError;
use sheetsmith_shared::RecordError;

/// Errors that can occur while advancing a world clock.
#[derive(Debug, thiserror::Error)]
pub enum TimeError {
    #[error("Invalid world record: {0}")]
    Record(#[from] RecordError),

    #[error("Invalid calendar: {0}")]
    Calendar(#[from] CalendarError),
}
