//! World clock and cascading time advancement.
//!
//! A `WorldClock` is a calendar position (year, month, day, hour) interpreted
//! against a world's `CalendarConfig`. Advancing adds to one field and then
//! carries overflow upward: hours into days, days into months (re-reading
//! the month length after every rollover), months into years.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CalendarError, DomainError};
use crate::value_objects::{ordinal_suffix, CalendarConfig};

// =============================================================================
// Time Unit
// =============================================================================

/// The clock field an advancement is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Hour,
    Day,
    Month,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hour" | "hours" => Ok(TimeUnit::Hour),
            "day" | "days" => Ok(TimeUnit::Day),
            "month" | "months" => Ok(TimeUnit::Month),
            other => Err(DomainError::parse(format!("Unknown time unit: {other}"))),
        }
    }
}

// =============================================================================
// World Clock
// =============================================================================

/// Current in-world date and hour.
///
/// Month and day are 1-based, hour is 0-based and below the calendar's hours
/// per day. `advance_time` always returns a clock within those bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldClock {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl Default for WorldClock {
    fn default() -> Self {
        Self {
            year: 1,
            month: 1,
            day: 1,
            hour: 0,
        }
    }
}

impl WorldClock {
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Render the clock against a calendar (e.g., "3rd of March, Year 1, 05:00").
    pub fn display(&self, calendar: &CalendarConfig) -> String {
        let month_name = calendar
            .month_name(self.month)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Month {}", self.month));
        format!(
            "{}{} of {}, Year {}, {:02}:00",
            self.day,
            ordinal_suffix(self.day),
            month_name,
            self.year,
            self.hour
        )
    }
}

// =============================================================================
// Advancement
// =============================================================================

/// Advance `clock` by `amount` of `unit` and normalize every field.
///
/// Pure and deterministic. `amount == 0` returns the clock unchanged, any
/// positive amount yields a strictly later clock.
///
/// # Errors
///
/// Fails with a `CalendarError` when the calendar has no months, a
/// zero-length month or zero hours per day, or when the clock has month or
/// day 0.
pub fn advance_time(
    clock: &WorldClock,
    calendar: &CalendarConfig,
    unit: TimeUnit,
    amount: u32,
) -> Result<WorldClock, CalendarError> {
    calendar.validate()?;
    if clock.month == 0 || clock.day == 0 {
        return Err(CalendarError::UnaddressableClock(format!(
            "month {} day {}",
            clock.month, clock.day
        )));
    }
    if amount == 0 {
        return Ok(*clock);
    }

    let month_count = u64::from(calendar.month_count());
    let hours_per_day = u64::from(calendar.hours_per_day);

    let mut year = i64::from(clock.year);
    let mut month = u64::from(clock.month);
    let mut day = u64::from(clock.day);
    let mut hour = u64::from(clock.hour);

    // Unnormalized add
    match unit {
        TimeUnit::Hour => hour += u64::from(amount),
        TimeUnit::Day => day += u64::from(amount),
        TimeUnit::Month => month += u64::from(amount),
    }

    // Hours into days
    day += hour / hours_per_day;
    hour %= hours_per_day;

    // Months into years, so every month index below is addressable
    year += ((month - 1) / month_count) as i64;
    month = (month - 1) % month_count + 1;

    let (year, month, day) = carry_days(calendar, year, month, day)?;

    let year = i32::try_from(year)
        .map_err(|_| CalendarError::UnaddressableClock(format!("year {year} out of range")))?;

    Ok(WorldClock {
        year,
        month: month as u32,
        day: day as u32,
        hour: hour as u32,
    })
}

/// Carry surplus days into months and years.
///
/// Whole years are skipped arithmetically, so the remaining cascade stays
/// within one pass per month plus one, whatever the advanced amount.
fn carry_days(
    calendar: &CalendarConfig,
    mut year: i64,
    mut month: u64,
    mut day: u64,
) -> Result<(i64, u64, u64), CalendarError> {
    let month_count = u64::from(calendar.month_count());
    let days_in_year: u64 = calendar.months.iter().map(|m| u64::from(m.days)).sum();

    // A full cycle from any month consumes exactly one year of days
    if days_in_year > 0 && day > days_in_year {
        let years = (day - 1) / days_in_year;
        day -= years * days_in_year;
        year += years as i64;
    }

    // Month lengths vary, so re-read after each rollover
    let budget = month_count + 1;
    let mut passes = 0u64;
    loop {
        let length = u64::from(calendar.month_length(month as u32).unwrap_or(0));
        if day <= length {
            return Ok((year, month, day));
        }
        passes += 1;
        if passes > budget {
            return Err(CalendarError::CascadeExhausted { passes });
        }
        day -= length;
        month += 1;
        if month > month_count {
            month = 1;
            year += 1;
        }
    }
}
