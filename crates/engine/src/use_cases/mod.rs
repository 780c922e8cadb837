//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area. Use cases read stored
//! records, run the pure domain engine and hand back results to persist or
//! display.

pub mod sheet;
pub mod time;

// Re-export main types
pub use sheet::{SheetError, SheetUseCases, SheetView, WeaponLine};
pub use time::{TimeAdvanceResult, TimeError, TimeUseCases};
