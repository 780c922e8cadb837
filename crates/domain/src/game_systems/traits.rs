//! Ruleset traits and the values they produce.
//!
//! Each tabletop rule system is a small strategy object: it owns its schema,
//! rolls starting stats, derives display values from raw scores and, where
//! the system has one, computes a combat block. Call sites never branch on a
//! ruleset id; they look the strategy up in the registry.

use serde::{Deserialize, Serialize};

use crate::character_sheet::RulesetDefinition;
use crate::value_objects::{RandomSource, StatBlock};

/// Core trait all rulesets must implement.
pub trait Ruleset: Send + Sync {
    /// Unique identifier (e.g., "dnd5", "cthulhu").
    fn id(&self) -> &str;

    /// Human-readable display name (e.g., "D&D 5th Edition").
    fn display_name(&self) -> &str;

    /// Schema driving sheet and form rendering.
    fn definition(&self) -> &RulesetDefinition;

    /// Roll a fresh base stat block.
    ///
    /// `species` only matters to systems with species bonuses.
    fn generate_stats(&self, species: &str, rng: &mut dyn RandomSource) -> StatBlock;

    /// Display value for a derived field, `None` when there is nothing to show.
    ///
    /// Only called for fields the schema marks `derived`, with an integer score.
    fn derive(&self, key: &str, score: i32) -> Option<String>;

    /// Combat-derived block for a stat block at a level.
    ///
    /// `cosmic_modifier` is an external percentage adjustment; systems that
    /// don't use it ignore it. Systems without a combat layer keep the default.
    fn combat_stats(
        &self,
        _stats: &StatBlock,
        _level: i32,
        _cosmic_modifier: i32,
    ) -> DerivedCombatBlock {
        DerivedCombatBlock::Empty {}
    }

    /// Flavor family used for generated biographies.
    fn genre(&self) -> Genre {
        Genre::Fantasy
    }
}

/// Flavor family of a ruleset, used to pick biography templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Fantasy,
    Horror,
}

// =============================================================================
// Combat Block
// =============================================================================

/// Combat-derived values for one sheet.
///
/// Transient: always recomputable from `(ruleset, stats, level)` plus the
/// cosmic modifier. Serializes as a flat object; the empty variant is `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "StoredCombatBlock")]
pub enum DerivedCombatBlock {
    Dnd5e {
        hp: i32,
        ac: i32,
        init: String,
        prof: String,
        spells: String,
    },
    Cthulhu {
        san: i32,
        hp: i32,
        magic: i32,
        #[serde(rename = "luckMod", default, skip_serializing_if = "Option::is_none")]
        luck_mod: Option<String>,
    },
    Empty {},
}

/// Read shape of a cached combat block.
///
/// Only a literal `{}` reads as the empty block; partial objects match no
/// shape and fail.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCombatBlock {
    Dnd5e {
        hp: i32,
        ac: i32,
        init: String,
        prof: String,
        spells: String,
    },
    Cthulhu {
        san: i32,
        hp: i32,
        magic: i32,
        #[serde(rename = "luckMod", default)]
        luck_mod: Option<String>,
    },
    Empty(NoFields),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NoFields {}

impl From<StoredCombatBlock> for DerivedCombatBlock {
    fn from(stored: StoredCombatBlock) -> Self {
        match stored {
            StoredCombatBlock::Dnd5e {
                hp,
                ac,
                init,
                prof,
                spells,
            } => DerivedCombatBlock::Dnd5e {
                hp,
                ac,
                init,
                prof,
                spells,
            },
            StoredCombatBlock::Cthulhu {
                san,
                hp,
                magic,
                luck_mod,
            } => DerivedCombatBlock::Cthulhu {
                san,
                hp,
                magic,
                luck_mod,
            },
            StoredCombatBlock::Empty(NoFields {}) => DerivedCombatBlock::Empty {},
        }
    }
}

impl Default for DerivedCombatBlock {
    fn default() -> Self {
        DerivedCombatBlock::Empty {}
    }
}

impl DerivedCombatBlock {
    pub fn is_empty(&self) -> bool {
        matches!(self, DerivedCombatBlock::Empty {})
    }
}

/// Narrow a widened intermediate back to `i32`, saturating at the bounds.
pub(crate) fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Format a number with an explicit sign ("+3", "-1", "+0").
pub fn signed(value: i32) -> String {
    format!("{value:+}")
}
