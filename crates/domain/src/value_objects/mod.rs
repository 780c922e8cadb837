//! Value objects - Immutable objects defined by their attributes

mod calendar;
mod random;
mod stat_block;

pub use calendar::{ordinal_suffix, CalendarConfig, MonthDefinition, DEFAULT_HOURS_PER_DAY};
pub use random::{best_three_of_four_d6, roll_die, RandomSource};
pub use stat_block::{StatBlock, StatValue};

#[cfg(test)]
pub(crate) use random::testing;
