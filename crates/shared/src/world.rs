//! Stored world rows: the clock columns plus the calendar configuration.
//!
//! Column names follow the storage layout (`current_year`, `calendar_config`,
//! `hours_per_day`), so these types are snake_case unlike the domain's
//! camelCase values. Columns this crate doesn't know are kept as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use sheetsmith_domain::{CalendarConfig, MonthDefinition, WorldClock, DEFAULT_HOURS_PER_DAY};

use crate::error::RecordError;

fn default_one() -> i64 {
    1
}

fn default_hours_per_day() -> i64 {
    i64::from(DEFAULT_HOURS_PER_DAY)
}

fn to_u32(field: &'static str, value: i64) -> Result<u32, RecordError> {
    u32::try_from(value).map_err(|_| RecordError::out_of_range(field, value))
}

/// One stored month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRecord {
    pub name: String,
    pub days: i64,
}

/// Stored `calendar_config` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfigRecord {
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: i64,
    #[serde(default)]
    pub months: Vec<MonthRecord>,
}

impl Default for CalendarConfigRecord {
    fn default() -> Self {
        Self::from(&CalendarConfig::default())
    }
}

impl CalendarConfigRecord {
    /// Convert to the domain calendar.
    ///
    /// Only range is checked here; empty calendars and zero-length months are
    /// rejected by the clock when it advances.
    pub fn calendar(&self) -> Result<CalendarConfig, RecordError> {
        let months = self
            .months
            .iter()
            .map(|m| Ok(MonthDefinition::new(m.name.clone(), to_u32("days", m.days)?)))
            .collect::<Result<Vec<_>, RecordError>>()?;
        Ok(CalendarConfig::new(
            months,
            to_u32("hours_per_day", self.hours_per_day)?,
        ))
    }
}

impl From<&CalendarConfig> for CalendarConfigRecord {
    fn from(calendar: &CalendarConfig) -> Self {
        Self {
            hours_per_day: i64::from(calendar.hours_per_day),
            months: calendar
                .months
                .iter()
                .map(|m| MonthRecord {
                    name: m.name.clone(),
                    days: i64::from(m.days),
                })
                .collect(),
        }
    }
}

/// Stored world row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldRecord {
    #[serde(default = "default_one")]
    pub current_year: i64,
    #[serde(default = "default_one")]
    pub current_month: i64,
    #[serde(default = "default_one")]
    pub current_day: i64,
    #[serde(default)]
    pub current_hour: i64,
    #[serde(default)]
    pub calendar_config: CalendarConfigRecord,
    /// Other columns (id, name, ...), carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for WorldRecord {
    fn default() -> Self {
        Self {
            current_year: 1,
            current_month: 1,
            current_day: 1,
            current_hour: 0,
            calendar_config: CalendarConfigRecord::default(),
            extra: Map::new(),
        }
    }
}

impl WorldRecord {
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The stored clock as a domain value.
    pub fn clock(&self) -> Result<WorldClock, RecordError> {
        let year = i32::try_from(self.current_year)
            .map_err(|_| RecordError::out_of_range("current_year", self.current_year))?;
        Ok(WorldClock::new(
            year,
            to_u32("current_month", self.current_month)?,
            to_u32("current_day", self.current_day)?,
            to_u32("current_hour", self.current_hour)?,
        ))
    }

    pub fn calendar(&self) -> Result<CalendarConfig, RecordError> {
        self.calendar_config.calendar()
    }

    /// Copy of this record with the clock columns replaced.
    pub fn with_clock(&self, clock: &WorldClock) -> Self {
        Self {
            current_year: i64::from(clock.year),
            current_month: i64::from(clock.month),
            current_day: i64::from(clock.day),
            current_hour: i64::from(clock.hour),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORED: &str = r#"{
        "id": "w-1",
        "name": "Greyhawk",
        "current_year": 576,
        "current_month": 2,
        "current_day": 3,
        "current_hour": 1,
        "calendar_config": {
            "hours_per_day": 2,
            "months": [{"name": "Ember", "days": 3}, {"name": "Frost", "days": 5}]
        }
    }"#;

    #[test]
    fn reads_stored_row() {
        let record = WorldRecord::from_json(STORED).unwrap();
        assert_eq!(record.clock().unwrap(), WorldClock::new(576, 2, 3, 1));
        let calendar = record.calendar().unwrap();
        assert_eq!(calendar.hours_per_day, 2);
        assert_eq!(calendar.month_length(2), Some(5));
        assert_eq!(record.extra.get("name"), Some(&Value::from("Greyhawk")));
    }

    #[test]
    fn missing_columns_get_defaults() {
        let record = WorldRecord::from_json(r#"{"calendar_config": {"months": []}}"#).unwrap();
        assert_eq!(record.clock().unwrap(), WorldClock::default());
        assert_eq!(record.calendar_config.hours_per_day, 24);

        let record = WorldRecord::from_json("{}").unwrap();
        assert_eq!(record.calendar().unwrap(), CalendarConfig::gregorian());
    }

    #[test]
    fn negative_values_are_rejected() {
        let record = WorldRecord {
            current_day: -1,
            ..WorldRecord::default()
        };
        assert!(matches!(
            record.clock(),
            Err(RecordError::OutOfRange { field: "current_day", value: -1 })
        ));

        let calendar = CalendarConfigRecord {
            hours_per_day: 24,
            months: vec![MonthRecord {
                name: "Backwards".to_string(),
                days: -30,
            }],
        };
        assert!(calendar.calendar().is_err());
    }

    #[test]
    fn with_clock_keeps_other_columns() {
        let record = WorldRecord::from_json(STORED).unwrap();
        let updated = record.with_clock(&WorldClock::new(577, 1, 1, 0));
        assert_eq!(updated.current_year, 577);
        assert_eq!(updated.current_hour, 0);
        assert_eq!(updated.calendar_config, record.calendar_config);

        let json = serde_json::to_value(&updated).unwrap();
        assert_eq!(json["id"], "w-1");
        assert_eq!(json["current_month"], 1);
    }

    #[test]
    fn calendar_round_trips_through_record() {
        let harptos = CalendarConfig::harptos();
        let record = CalendarConfigRecord::from(&harptos);
        assert_eq!(record.calendar().unwrap(), harptos);
    }
}
