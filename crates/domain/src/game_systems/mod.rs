//! Ruleset implementations for the supported tabletop systems.
//!
//! Each system implements the `Ruleset` trait from `traits.rs` and is looked
//! up by id in a `RulesetRegistry`. Adding a system means registering one
//! more strategy object; no call site changes.
//!
//! # Supported Systems
//!
//! - D&D 5th Edition (`dnd5`)
//! - Call of Cthulhu 7e (`cthulhu`)
//! - Rolemaster (`rolemaster`)
//! - RuneQuest (`runequest`)
//! - Rêve de Dragon (`rdd`)

mod coc7e;
mod dnd5e;
mod generation;
mod rdd;
mod rolemaster;
mod runequest;
mod traits;
mod weapons;

pub use coc7e::{success_thresholds, Coc7eSystem};
pub use dnd5e::{ability_modifier, proficiency_bonus, species_bonus_ability, Dnd5eSystem};
pub use generation::{
    generate_character, Biography, GeneratedCharacter, DEFAULT_CLASS, DEFAULT_SPECIES,
};
pub use rdd::{difficulty_line, RddSystem};
pub use rolemaster::{stat_bonus, RolemasterSystem};
pub use runequest::{characteristic_bonus, RuneQuestSystem};
pub use traits::{signed, DerivedCombatBlock, Genre, Ruleset};
pub use weapons::{calculate_weapon_stats, RangeType, WeaponDescriptor, WeaponStats};

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::character_sheet::RulesetDefinition;
use crate::error::DomainError;
use crate::value_objects::{RandomSource, StatBlock, StatValue};

/// Ruleset used when a lookup misses and nothing else was configured.
pub const DEFAULT_RULESET_ID: &str = Dnd5eSystem::ID;

/// Registry of available rulesets.
///
/// Always holds its default ruleset, so fallback lookups cannot fail.
pub struct RulesetRegistry {
    rulesets: Vec<Arc<dyn Ruleset>>,
    default: Arc<dyn Ruleset>,
}

impl Default for RulesetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesetRegistry {
    /// Create a registry with all built-in rulesets and `dnd5` as default.
    pub fn new() -> Self {
        let default: Arc<dyn Ruleset> = Arc::new(Dnd5eSystem::new());
        let mut registry = Self {
            rulesets: vec![default.clone()],
            default,
        };
        registry.register(Arc::new(Coc7eSystem::new()));
        registry.register(Arc::new(RolemasterSystem::new()));
        registry.register(Arc::new(RuneQuestSystem::new()));
        registry.register(Arc::new(RddSystem::new()));
        registry
    }

    /// Built-in rulesets with an explicit fallback.
    ///
    /// # Errors
    ///
    /// Fails when `default_id` names no registered ruleset.
    pub fn with_default(default_id: &str) -> Result<Self, DomainError> {
        let mut registry = Self::new();
        registry.set_default(default_id)?;
        Ok(registry)
    }

    /// Change the fallback ruleset.
    pub fn set_default(&mut self, id: &str) -> Result<(), DomainError> {
        let ruleset = self
            .lookup(id)
            .ok_or_else(|| DomainError::validation(format!("Unknown default ruleset: {id}")))?;
        self.default = ruleset;
        Ok(())
    }

    /// Register a ruleset, replacing any existing one with the same id.
    pub fn register(&mut self, ruleset: Arc<dyn Ruleset>) {
        if self.default.id() == ruleset.id() {
            self.default = ruleset.clone();
        }
        match self.rulesets.iter_mut().find(|r| r.id() == ruleset.id()) {
            Some(slot) => *slot = ruleset,
            None => self.rulesets.push(ruleset),
        }
    }

    /// Exact lookup without fallback.
    pub fn lookup(&self, id: &str) -> Option<Arc<dyn Ruleset>> {
        self.rulesets.iter().find(|r| r.id() == id).cloned()
    }

    /// Lookup falling back to the default ruleset for unknown ids.
    pub fn get(&self, id: &str) -> Arc<dyn Ruleset> {
        self.lookup(id).unwrap_or_else(|| self.default.clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rulesets.iter().any(|r| r.id() == id)
    }

    pub fn default_id(&self) -> &str {
        self.default.id()
    }

    /// All registered rulesets as `(id, display name)`, in registration order.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.rulesets
            .iter()
            .map(|r| (r.id(), r.display_name()))
            .collect()
    }

    /// Schema for a ruleset (default schema for unknown ids).
    pub fn definition(&self, id: &str) -> RulesetDefinition {
        self.get(id).definition().clone()
    }

    /// Roll base stats with the ruleset's generator (default for unknown ids).
    pub fn generate_base_stats(
        &self,
        id: &str,
        species: &str,
        rng: &mut dyn RandomSource,
    ) -> StatBlock {
        self.get(id).generate_stats(species, rng)
    }

    /// Roll stats and a biography (default ruleset for unknown ids).
    pub fn generate_character_data(
        &self,
        id: &str,
        species: &str,
        class: &str,
        rng: &mut dyn RandomSource,
    ) -> GeneratedCharacter {
        generate_character(self.get(id).as_ref(), species, class, rng)
    }

    /// Display value for one field.
    ///
    /// `None` for unknown rulesets, fields not marked `derived`, and values
    /// that don't coerce to an integer.
    pub fn derived_value(&self, id: &str, key: &str, raw: &StatValue) -> Option<String> {
        let ruleset = self.lookup(id)?;
        let field = ruleset.definition().field(key)?;
        if !field.derived {
            return None;
        }
        let score = raw.as_i32()?;
        ruleset.derive(key, score)
    }

    /// Display values for every derived field present in `stats`.
    pub fn derived_values(&self, id: &str, stats: &StatBlock) -> BTreeMap<String, String> {
        stats
            .iter()
            .filter_map(|(key, raw)| {
                self.derived_value(id, key, raw)
                    .map(|display| (key.to_string(), display))
            })
            .collect()
    }

    /// Combat block for a sheet; unknown rulesets give the empty block.
    pub fn combat_stats(
        &self,
        id: &str,
        stats: &StatBlock,
        level: i32,
        cosmic_modifier: i32,
    ) -> DerivedCombatBlock {
        match self.lookup(id) {
            Some(ruleset) => ruleset.combat_stats(stats, level, cosmic_modifier),
            None => DerivedCombatBlock::Empty {},
        }
    }
}

// =============================================================================
// Process-wide registry
// =============================================================================

static REGISTRY: Lazy<RulesetRegistry> = Lazy::new(RulesetRegistry::new);

/// The built-in registry with `dnd5` as default.
pub fn registry() -> &'static RulesetRegistry {
    &REGISTRY
}

/// Schema for a ruleset; unknown ids get the default ruleset's schema.
pub fn get_ruleset(id: &str) -> RulesetDefinition {
    REGISTRY.definition(id)
}

pub fn generate_base_stats(id: &str, species: &str, rng: &mut dyn RandomSource) -> StatBlock {
    REGISTRY.generate_base_stats(id, species, rng)
}

pub fn generate_character_data(
    id: &str,
    species: &str,
    class: &str,
    rng: &mut dyn RandomSource,
) -> GeneratedCharacter {
    REGISTRY.generate_character_data(id, species, class, rng)
}

pub fn get_derived_value(id: &str, key: &str, raw: &StatValue) -> Option<String> {
    REGISTRY.derived_value(id, key, raw)
}

pub fn derived_values(id: &str, stats: &StatBlock) -> BTreeMap<String, String> {
    REGISTRY.derived_values(id, stats)
}

pub fn calculate_combat_stats(id: &str, stats: &StatBlock, level: i32) -> DerivedCombatBlock {
    REGISTRY.combat_stats(id, stats, level, 0)
}

pub fn calculate_combat_stats_with_cosmic(
    id: &str,
    stats: &StatBlock,
    level: i32,
    cosmic_modifier: i32,
) -> DerivedCombatBlock {
    REGISTRY.combat_stats(id, stats, level, cosmic_modifier)
}
