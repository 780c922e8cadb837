//! Sheetsmith Shared - Persisted record shapes
//!
//! This crate holds the storage-facing shapes of worlds and entities and
//! their conversions into domain values:
//! - World rows (clock columns + calendar configuration)
//! - Entity rows (ruleset id + free-form sheet data)
//!
//! # Design Principles
//!
//! 1. **Storage names** - snake_case columns exactly as stored
//! 2. **Lenient reads** - malformed sheet data degrades, it never fails a read
//! 3. **No business logic** - calculations live in the domain crate

pub mod entity;
pub mod error;
pub mod world;

pub use entity::{EntityRecord, ARSENAL_KEY, COMBAT_KEY, LEVEL_KEY};
pub use error::RecordError;
pub use world::{CalendarConfigRecord, MonthRecord, WorldRecord};
