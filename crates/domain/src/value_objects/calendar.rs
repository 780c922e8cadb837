//! Calendar system value objects
//!
//! Worlds keep their own calendar: an ordered list of months of arbitrary
//! length plus a configurable number of hours per day. The calendar is pure
//! configuration; the clock arithmetic lives in `game_time`.
//!
//! Key types:
//! - `MonthDefinition` - One named month and its length in days
//! - `CalendarConfig` - Ordered months plus hours per day

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Hours per day when a calendar doesn't say otherwise
pub const DEFAULT_HOURS_PER_DAY: u32 = 24;

fn default_hours_per_day() -> u32 {
    DEFAULT_HOURS_PER_DAY
}

// ============================================================================
// MonthDefinition
// ============================================================================

/// Configuration for a single month in a calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDefinition {
    /// Month name (e.g., "Hammer", "January")
    pub name: String,
    /// Number of days in this month
    pub days: u32,
}

impl MonthDefinition {
    pub fn new(name: impl Into<String>, days: u32) -> Self {
        Self {
            name: name.into(),
            days,
        }
    }
}

// ============================================================================
// CalendarConfig
// ============================================================================

/// A world's calendar: ordered months and the length of a day in hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarConfig {
    /// Month definitions in order
    pub months: Vec<MonthDefinition>,
    /// Hours per day (typically 24)
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::gregorian()
    }
}

impl CalendarConfig {
    pub fn new(months: Vec<MonthDefinition>, hours_per_day: u32) -> Self {
        Self {
            months,
            hours_per_day,
        }
    }

    /// Number of months in a year.
    pub fn month_count(&self) -> u32 {
        self.months.len() as u32
    }

    /// Length of a 1-based month, `None` when the month doesn't exist.
    pub fn month_length(&self, month: u32) -> Option<u32> {
        self.month_at(month).map(|m| m.days)
    }

    /// Name of a 1-based month, `None` when the month doesn't exist.
    pub fn month_name(&self, month: u32) -> Option<&str> {
        self.month_at(month).map(|m| m.name.as_str())
    }

    fn month_at(&self, month: u32) -> Option<&MonthDefinition> {
        let index = month.checked_sub(1)? as usize;
        self.months.get(index)
    }

    /// Total number of days in a year.
    pub fn days_in_year(&self) -> u32 {
        self.months.iter().map(|m| m.days).sum()
    }

    /// Check the calendar can drive the clock.
    ///
    /// An empty month list, a zero-length month or a zero-hour day would make
    /// carry normalization loop forever.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.months.is_empty() {
            return Err(CalendarError::NoMonths);
        }
        if self.hours_per_day == 0 {
            return Err(CalendarError::ZeroHoursPerDay);
        }
        if let Some((index, month)) = self.months.iter().enumerate().find(|(_, m)| m.days == 0) {
            return Err(CalendarError::EmptyMonth {
                index: index + 1,
                name: month.name.clone(),
            });
        }
        Ok(())
    }

    // Built-in calendars

    /// Creates the standard Gregorian calendar (no leap years).
    pub fn gregorian() -> Self {
        Self {
            months: vec![
                MonthDefinition::new("January", 31),
                MonthDefinition::new("February", 28),
                MonthDefinition::new("March", 31),
                MonthDefinition::new("April", 30),
                MonthDefinition::new("May", 31),
                MonthDefinition::new("June", 30),
                MonthDefinition::new("July", 31),
                MonthDefinition::new("August", 31),
                MonthDefinition::new("September", 30),
                MonthDefinition::new("October", 31),
                MonthDefinition::new("November", 30),
                MonthDefinition::new("December", 31),
            ],
            hours_per_day: DEFAULT_HOURS_PER_DAY,
        }
    }

    /// Creates the Calendar of Harptos (Forgotten Realms), without festival days.
    ///
    /// 12 months of 30 days each: Hammer, Alturiak, Ches, Tarsakh, Mirtul,
    /// Kythorn, Flamerule, Eleasis, Eleint, Marpenoth, Uktar, Nightal.
    pub fn harptos() -> Self {
        let names = [
            "Hammer",
            "Alturiak",
            "Ches",
            "Tarsakh",
            "Mirtul",
            "Kythorn",
            "Flamerule",
            "Eleasis",
            "Eleint",
            "Marpenoth",
            "Uktar",
            "Nightal",
        ];
        Self {
            months: names
                .iter()
                .map(|name| MonthDefinition::new(*name, 30))
                .collect(),
            hours_per_day: DEFAULT_HOURS_PER_DAY,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Returns the ordinal suffix for a day number (st, nd, rd, th).
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod calendar_config {
        use super::*;

        #[test]
        fn gregorian_has_365_days() {
            let calendar = CalendarConfig::gregorian();
            assert_eq!(calendar.days_in_year(), 365);
            assert_eq!(calendar.month_count(), 12);
            assert_eq!(calendar.hours_per_day, 24);
        }

        #[test]
        fn harptos_has_360_month_days() {
            let calendar = CalendarConfig::harptos();
            assert_eq!(calendar.days_in_year(), 360);
            assert_eq!(calendar.month_name(5), Some("Mirtul"));
        }

        #[test]
        fn default_is_gregorian() {
            assert_eq!(CalendarConfig::default(), CalendarConfig::gregorian());
        }

        #[test]
        fn month_lookup_is_one_based() {
            let calendar = CalendarConfig::gregorian();
            assert_eq!(calendar.month_length(1), Some(31));
            assert_eq!(calendar.month_length(2), Some(28));
            assert_eq!(calendar.month_length(0), None);
            assert_eq!(calendar.month_length(13), None);
            assert_eq!(calendar.month_name(12), Some("December"));
        }

        #[test]
        fn hours_per_day_defaults_when_missing() {
            let calendar: CalendarConfig =
                serde_json::from_str(r#"{"months": [{"name": "Only", "days": 10}]}"#).unwrap();
            assert_eq!(calendar.hours_per_day, 24);
            assert_eq!(calendar.month_count(), 1);
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn presets_are_valid() {
            assert!(CalendarConfig::gregorian().validate().is_ok());
            assert!(CalendarConfig::harptos().validate().is_ok());
        }

        #[test]
        fn rejects_empty_calendar() {
            let calendar = CalendarConfig::new(vec![], 24);
            assert_eq!(calendar.validate(), Err(CalendarError::NoMonths));
        }

        #[test]
        fn rejects_zero_length_month() {
            let calendar = CalendarConfig::new(
                vec![MonthDefinition::new("Dawn", 10), MonthDefinition::new("Void", 0)],
                24,
            );
            assert_eq!(
                calendar.validate(),
                Err(CalendarError::EmptyMonth {
                    index: 2,
                    name: "Void".to_string()
                })
            );
        }

        #[test]
        fn rejects_zero_hour_days() {
            let calendar = CalendarConfig::new(vec![MonthDefinition::new("Dawn", 10)], 0);
            assert_eq!(calendar.validate(), Err(CalendarError::ZeroHoursPerDay));
        }
    }

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(31), "st");
        assert_eq!(ordinal_suffix(111), "th");
    }
}
