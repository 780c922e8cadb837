//! Time use cases.
//!
//! Advances a stored world's clock through its own calendar and hands back
//! the updated record for the caller to persist.

mod error;

pub use error::TimeError;

use serde::Serialize;

use sheetsmith_domain::{advance_time, TimeUnit, WorldClock};
use sheetsmith_shared::WorldRecord;

/// Container for time use cases.
#[derive(Debug, Default)]
pub struct TimeUseCases;

/// Result of advancing a world's clock.
#[derive(Debug, Clone, Serialize)]
pub struct TimeAdvanceResult {
    pub previous: WorldClock,
    pub current: WorldClock,
    /// Current clock rendered against the world's calendar
    pub display: String,
    /// The world row with the new clock columns
    pub world: WorldRecord,
}

impl TimeUseCases {
    pub fn new() -> Self {
        Self
    }

    /// Advance a world's clock by `amount` of `unit`.
    ///
    /// # Errors
    ///
    /// `TimeError::Record` for out-of-range stored columns,
    /// `TimeError::Calendar` when the calendar can't drive the clock.
    pub fn advance(
        &self,
        world: &WorldRecord,
        unit: TimeUnit,
        amount: u32,
    ) -> Result<TimeAdvanceResult, TimeError> {
        let previous = world.clock()?;
        let calendar = world.calendar()?;

        let current = advance_time(&previous, &calendar, unit, amount).map_err(|e| {
            tracing::warn!(error = %e, "World calendar cannot advance the clock");
            e
        })?;

        tracing::info!(
            unit = %unit,
            amount,
            from = ?previous,
            to = ?current,
            "Advanced world clock"
        );

        Ok(TimeAdvanceResult {
            previous,
            current,
            display: current.display(&calendar),
            world: world.with_clock(&current),
        })
    }

    /// Advance a world given as stored JSON.
    pub fn advance_json(
        &self,
        json: &str,
        unit: TimeUnit,
        amount: u32,
    ) -> Result<TimeAdvanceResult, TimeError> {
        let world = WorldRecord::from_json(json)?;
        self.advance(&world, unit, amount)
    }
}
