//! Sheetsmith domain: the ruleset calculation engine and the world clock.
//!
//! Everything here is synchronous and pure. Randomness comes in through
//! `RandomSource`, configuration through explicit arguments.

pub mod character_sheet;
pub mod error;
pub mod game_systems;
pub mod game_time;
pub mod value_objects;

pub use error::{CalendarError, DomainError};

// Re-export ruleset traits and the engine surface
pub use game_systems::{
    calculate_combat_stats, calculate_combat_stats_with_cosmic, calculate_weapon_stats,
    derived_values, generate_base_stats, generate_character_data, get_derived_value, get_ruleset,
    registry, Biography, DerivedCombatBlock, GeneratedCharacter, RangeType, Ruleset,
    RulesetRegistry, WeaponDescriptor, WeaponStats, DEFAULT_RULESET_ID,
};

// Re-export ruleset schema types
pub use character_sheet::{
    AttributeGroup, EntityFields, EntityKind, FieldDescriptor, FieldKind, LayoutHint,
    RulesetDefinition,
};

// Re-export game time types
pub use game_time::{advance_time, TimeUnit, WorldClock};

pub use value_objects::{
    CalendarConfig, MonthDefinition, RandomSource, StatBlock, StatValue, DEFAULT_HOURS_PER_DAY,
};
