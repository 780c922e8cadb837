//! Sheetsmith Engine library.
//!
//! Application layer around the pure domain engine.
//!
//! ## Structure
//!
//! - `use_cases/` - Sheet and world-clock operations over stored records
//! - `infrastructure/` - Configuration and port implementations (randomness)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
