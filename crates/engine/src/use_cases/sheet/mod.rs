//! Sheet use cases.
//!
//! Handles ruleset lookup, character generation and the derived sheet view:
//! display values, combat block and weapon lines recomputed from a stored
//! entity row on every read.

mod error;

pub use error::SheetError;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use sheetsmith_domain::game_systems::{proficiency_bonus, Dnd5eSystem};
use sheetsmith_domain::{
    calculate_weapon_stats, DerivedCombatBlock, GeneratedCharacter, RulesetDefinition,
    RulesetRegistry, WeaponStats,
};
use sheetsmith_shared::EntityRecord;

use crate::infrastructure::ports::{random_source, RandomPort};

// =============================================================================
// Result Types
// =============================================================================

/// One resolved arsenal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponLine {
    pub name: String,
    #[serde(flatten)]
    pub stats: WeaponStats,
}

/// Everything a sheet shows beyond the raw stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetView {
    /// Ruleset the sheet renders with (the default for unknown ids)
    pub ruleset_id: String,
    pub ruleset_name: String,
    pub level: i32,
    /// Display values keyed by field
    pub derived: BTreeMap<String, String>,
    pub combat: DerivedCombatBlock,
    pub weapons: Vec<WeaponLine>,
    /// The input row with its cached `combat` refreshed
    pub record: EntityRecord,
}

// =============================================================================
// Use Cases
// =============================================================================

/// Container for sheet use cases.
pub struct SheetUseCases {
    registry: Arc<RulesetRegistry>,
    random: Arc<dyn RandomPort>,
}

impl SheetUseCases {
    pub fn new(registry: Arc<RulesetRegistry>, random: Arc<dyn RandomPort>) -> Self {
        Self { registry, random }
    }

    /// `(id, display name)` of every registered ruleset.
    pub fn list_rulesets(&self) -> Vec<(String, String)> {
        self.registry
            .list()
            .into_iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect()
    }

    /// Schema for a ruleset, falling back to the default.
    pub fn schema(&self, ruleset_id: &str) -> RulesetDefinition {
        self.note_fallback(ruleset_id);
        self.registry.definition(ruleset_id)
    }

    /// Roll a new character with injected randomness.
    pub fn generate(&self, ruleset_id: &str, species: &str, class: &str) -> GeneratedCharacter {
        self.note_fallback(ruleset_id);
        let mut rng = random_source(self.random.as_ref());
        self.registry
            .generate_character_data(ruleset_id, species, class, &mut rng)
    }

    /// Recompute the derived view of a stored entity.
    ///
    /// `cosmic_modifier` is the external percentage adjustment (0 for none).
    pub fn view(&self, record: &EntityRecord, cosmic_modifier: i32) -> SheetView {
        let requested = record.ruleset_id.as_str();
        self.note_fallback(requested);
        let ruleset = self.registry.get(requested);

        let stats = record.stat_block();
        let level = record.level();
        let derived = self.registry.derived_values(requested, &stats);
        let combat = self
            .registry
            .combat_stats(requested, &stats, level, cosmic_modifier);

        let arsenal = record.arsenal();
        if !arsenal.is_empty() && ruleset.id() != Dnd5eSystem::ID {
            tracing::debug!(
                ruleset_id = %ruleset.id(),
                weapons = arsenal.len(),
                "Resolving arsenal with D&D 5e weapon rules"
            );
        }
        let proficiency = proficiency_bonus(level);
        let weapons = arsenal
            .iter()
            .map(|weapon| WeaponLine {
                name: weapon.name.clone(),
                stats: calculate_weapon_stats(weapon, &stats, proficiency),
            })
            .collect();

        SheetView {
            ruleset_id: ruleset.id().to_string(),
            ruleset_name: ruleset.display_name().to_string(),
            level,
            derived,
            record: record.with_cached_combat(&combat),
            combat,
            weapons,
        }
    }

    /// Recompute the view of an entity given as stored JSON.
    pub fn view_json(&self, json: &str, cosmic_modifier: i32) -> Result<SheetView, SheetError> {
        let record = EntityRecord::from_json(json)?;
        Ok(self.view(&record, cosmic_modifier))
    }

    fn note_fallback(&self, ruleset_id: &str) {
        if !self.registry.contains(ruleset_id) {
            tracing::debug!(
                ruleset_id = %ruleset_id,
                fallback = %self.registry.default_id(),
                "Unknown ruleset, using default"
            );
        }
    }
}
