//! Sheet operation errors.

use sheetsmith_shared::RecordError;

/// Errors that can occur during sheet operations.
///
/// Rendering itself never fails; only reading a stored row can.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Invalid entity record: {0}")]
    Record(#[from] RecordError),
}
